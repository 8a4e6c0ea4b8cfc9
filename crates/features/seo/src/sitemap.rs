//! `sitemaps.org` sitemap of every supported locale × indexed route.

use crate::escape::escape_markup;
use crate::metadata::PageMetadata;
use crate::routes::{Route, indexed_routes};
use chrono::{DateTime, SecondsFormat, Utc};
use sprouts_domain::Locale;
use std::fmt::Write;
use strum::{Display, IntoEnumIterator};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    fn new(origin: &str, route: Route, locale: Locale, now: DateTime<Utc>) -> Self {
        let is_home = route == Route::Home;
        Self {
            url: PageMetadata::absolute(origin, &route.localized(locale)),
            last_modified: now,
            change_frequency: if is_home { ChangeFrequency::Weekly } else { ChangeFrequency::Monthly },
            priority: if is_home { 1.0 } else { 0.7 },
        }
    }
}

/// One entry per locale and indexed route, locale-major.
pub fn build_sitemap(origin: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    Locale::iter()
        .flat_map(|locale| indexed_routes().map(move |route| SitemapEntry::new(origin, route, locale, now)))
        .collect()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 192);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\">");

    for entry in entries {
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_markup(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ORIGIN: &str = "https://www.evolvesprouts.com";

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn home_is_weekly_with_top_priority() {
        let entries = build_sitemap(ORIGIN, fixed_now());
        let home = &entries[0];

        assert_eq!(home.url, "https://www.evolvesprouts.com/en");
        assert_eq!(home.change_frequency, ChangeFrequency::Weekly);
        assert!((home.priority - 1.0).abs() < f32::EPSILON);

        let events = entries.iter().find(|e| e.url.ends_with("/zh-CN/events")).unwrap();
        assert_eq!(events.change_frequency, ChangeFrequency::Monthly);
        assert!((events.priority - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn renders_sitemaps_org_xml() {
        let xml = render_sitemap(&build_sitemap(ORIGIN, fixed_now())[..1]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://www.evolvesprouts.com/en</loc>"));
        assert!(xml.contains("<lastmod>2026-03-01T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }
}
