//! Guards for hrefs and configured public URLs.
//!
//! Configured links reach rendered pages, so only `https` (or `http` on `localhost`) survives
//! normalization, and anything that is not clearly an internal path, an anchor or a known
//! protocol is classified as unsafe.

use url::Url;

const MAILTO: &str = "mailto:";
const TEL: &str = "tel:";

/// Coarse classification of an href as written in content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
    Http,
    Mailto,
    Tel,
    Hash,
    Internal,
    Unsafe,
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[must_use]
pub fn is_http_href(href: &str) -> bool {
    let value = href.trim();
    starts_with_ignore_case(value, "http://") || starts_with_ignore_case(value, "https://")
}

/// `http(s)`, `mailto:` and `tel:` links leave the site; paths and anchors do not.
#[must_use]
pub fn is_external_href(href: &str) -> bool {
    let value = href.trim();
    is_http_href(value) || starts_with_ignore_case(value, MAILTO) || starts_with_ignore_case(value, TEL)
}

#[must_use]
pub fn href_kind(href: &str) -> HrefKind {
    let value = href.trim();
    if value.is_empty() {
        HrefKind::Unsafe
    } else if is_http_href(value) {
        HrefKind::Http
    } else if starts_with_ignore_case(value, MAILTO) {
        HrefKind::Mailto
    } else if starts_with_ignore_case(value, TEL) {
        HrefKind::Tel
    } else if value.starts_with('#') {
        HrefKind::Hash
    } else if value.starts_with('/') && !value.starts_with("//") {
        HrefKind::Internal
    } else {
        HrefKind::Unsafe
    }
}

#[must_use]
pub fn is_unsafe_href(href: &str) -> bool {
    href_kind(href) == HrefKind::Unsafe
}

/// Last two labels of a host name (`media.example.com` -> `example.com`).
fn root_domain(host: &str) -> Option<String> {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.as_slice() {
        [] => None,
        [single] => Some((*single).to_owned()),
        [.., second, last] => Some(format!("{second}.{last}")),
    }
}

/// True when `href` is an `http(s)` link under the same root domain as `current_host`.
#[must_use]
pub fn is_same_root_domain_http_href(href: &str, current_host: &str) -> bool {
    if !is_http_href(href) {
        return false;
    }
    let Some(current) = root_domain(current_host) else { return false };

    Url::parse(href.trim())
        .ok()
        .and_then(|url| url.host_str().and_then(root_domain))
        .is_some_and(|root| root == current)
}

fn is_allowed_public_url(url: &Url) -> bool {
    match url.scheme() {
        "https" => true,
        "http" => url.host_str().is_some_and(|h| h.eq_ignore_ascii_case("localhost")),
        _ => false,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses a configured URL, keeping it only if it is `https` (or `http` on `localhost`).
#[must_use]
pub fn normalize_public_url(value: Option<&str>) -> Option<String> {
    let url = Url::parse(non_blank(value)?).ok()?;
    is_allowed_public_url(&url).then(|| url.to_string())
}

/// Accepts `local@domain.tld`-shaped addresses without whitespace.
#[must_use]
pub fn normalize_email(value: Option<&str>) -> Option<String> {
    let value = non_blank(value)?;
    if value.chars().any(char::is_whitespace) {
        return None;
    }

    let (local, domain) = value.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }

    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    has_inner_dot.then(|| value.to_owned())
}

/// Builds a WhatsApp link with `text` pre-filled, keeping the base URL's other query params.
///
/// Returns an empty string when the base URL is missing or not allowed.
#[must_use]
pub fn build_whatsapp_href(base: Option<&str>, message: Option<&str>) -> String {
    let Some(mut url) = normalize_public_url(base).and_then(|u| Url::parse(&u).ok()) else {
        return String::new();
    };

    if let Some(message) = non_blank(message) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "text")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut().clear().extend_pairs(kept).append_pair("text", message);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_http_links() {
        assert!(is_http_href("https://example.com"));
        assert!(is_http_href("http://example.com"));
        assert!(is_http_href("  HTTPS://example.com/path  "));

        assert!(!is_http_href("/about-us"));
        assert!(!is_http_href("#resources"));
        assert!(!is_http_href("mailto:test@example.com"));
    }

    #[test]
    fn external_links_include_contact_protocols() {
        assert!(is_external_href("https://example.com"));
        assert!(is_external_href("mailto:test@example.com"));
        assert!(is_external_href("TEL:+85212345678"));

        assert!(!is_external_href("/zh-HK/events"));
        assert!(!is_external_href("#resources"));
    }

    #[test]
    fn classifies_href_kinds() {
        assert_eq!(href_kind("https://example.com"), HrefKind::Http);
        assert_eq!(href_kind("mailto:test@example.com"), HrefKind::Mailto);
        assert_eq!(href_kind("tel:+85212345678"), HrefKind::Tel);
        assert_eq!(href_kind("#resources"), HrefKind::Hash);
        assert_eq!(href_kind("/en/about-us"), HrefKind::Internal);
    }

    #[test]
    fn flags_unsafe_hrefs() {
        for href in [
            "javascript:alert(1)",
            "data:text/html;base64,abc",
            "//example.com/path",
            "ftp://example.com",
            "   ",
        ] {
            assert!(is_unsafe_href(href), "{href} should be unsafe");
        }
    }

    #[test]
    fn same_root_domain_spans_subdomains() {
        assert!(is_same_root_domain_http_href(
            "https://media.example.com/v1/assets/share/abc",
            "www-staging.example.com"
        ));
        assert!(is_same_root_domain_http_href("https://admin.example.com/dashboard", "www.example.com"));

        assert!(!is_same_root_domain_http_href("https://cdn.another-example.com/d", "www.example.com"));
        assert!(!is_same_root_domain_http_href("https://example.net/v1", "www.example.com"));
        assert!(!is_same_root_domain_http_href("mailto:hello@example.com", "www.example.com"));
        assert!(!is_same_root_domain_http_href("https://media.example.com/path", ""));
    }

    #[test]
    fn public_urls_require_https_or_localhost() {
        assert_eq!(
            normalize_public_url(Some(" https://instagram.com/evolvesprouts ")).as_deref(),
            Some("https://instagram.com/evolvesprouts")
        );
        assert_eq!(
            normalize_public_url(Some("http://localhost:3000")).as_deref(),
            Some("http://localhost:3000/")
        );
        assert_eq!(normalize_public_url(Some("http://example.com")), None);
        assert_eq!(normalize_public_url(Some("/contact-us")), None);
        assert_eq!(normalize_public_url(Some("   ")), None);
        assert_eq!(normalize_public_url(None), None);
    }

    #[test]
    fn emails_need_a_dotted_domain() {
        assert_eq!(normalize_email(Some(" hello@example.com ")).as_deref(), Some("hello@example.com"));
        assert_eq!(normalize_email(Some("not-an-email")), None);
        assert_eq!(normalize_email(Some("a@b")), None);
        assert_eq!(normalize_email(Some("a@.com")), None);
        assert_eq!(normalize_email(Some("a b@example.com")), None);
        assert_eq!(normalize_email(Some("a@b@example.com")), None);
    }

    #[test]
    fn whatsapp_href_keeps_existing_params() {
        let href = build_whatsapp_href(
            Some("https://wa.me/message/ABCDEFG?src=qr"),
            Some("Hi, I'd like to book a free session!"),
        );

        let url = Url::parse(&href).unwrap();
        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert_eq!(
            pairs,
            vec![
                ("src".to_owned(), "qr".to_owned()),
                ("text".to_owned(), "Hi, I'd like to book a free session!".to_owned()),
            ]
        );
    }

    #[test]
    fn whatsapp_href_replaces_text_and_skips_blank_messages() {
        let replaced = build_whatsapp_href(Some("https://wa.me/852?text=old"), Some("new"));
        assert_eq!(replaced, "https://wa.me/852?text=new");

        let untouched = build_whatsapp_href(Some("https://wa.me/852"), Some("  "));
        assert_eq!(untouched, "https://wa.me/852");

        assert_eq!(build_whatsapp_href(Some("/contact-us"), Some("hello")), "");
    }
}
