/// `robots.txt` allowing everything and pointing crawlers at the sitemap.
pub fn render_robots(origin: &str, host: &str) -> String {
    let origin = origin.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {origin}/sitemap.xml\nHost: {host}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_sitemap_and_host() {
        let robots = render_robots("https://www.evolvesprouts.com/", "www.evolvesprouts.com");
        assert_eq!(
            robots,
            "User-agent: *\nAllow: /\n\nSitemap: https://www.evolvesprouts.com/sitemap.xml\nHost: www.evolvesprouts.com\n"
        );
    }
}
