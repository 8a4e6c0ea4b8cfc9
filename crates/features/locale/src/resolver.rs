//! Locale resolution and locale-prefixed paths.
//!
//! The first non-empty path segment selects the locale when it is a supported code
//! (exact match); anything else resolves to the configured default. Resolution never fails.

use serde::Serialize;
use sprouts_domain::{Direction, Locale};
use sprouts_kernel::security::links::{is_external_href, is_http_href};
use url::Url;

/// Active locale for a request together with its text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResolvedLocale {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "zh-HK"))]
    pub locale: Locale,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "ltr"))]
    pub direction: Direction,
}

impl From<Locale> for ResolvedLocale {
    fn from(locale: Locale) -> Self {
        Self { locale, direction: locale.direction() }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResolver {
    default: Locale,
}

impl LocaleResolver {
    pub const fn new(default: Locale) -> Self {
        Self { default }
    }

    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn locale_from_path(&self, path: &str) -> Locale {
        locale_segment(path).unwrap_or(self.default)
    }

    pub fn resolve(&self, path: &str) -> ResolvedLocale {
        self.locale_from_path(path).into()
    }
}

/// Reduces a path or absolute URL to a clean pathname.
///
/// Drops the query and fragment, adds a leading slash and removes trailing ones.
/// Blank input becomes `/`; a bare `#` is kept as is.
pub fn sanitize_path(path: &str) -> String {
    let value = path.trim();
    if value.is_empty() {
        return "/".to_owned();
    }
    if value == "#" {
        return value.to_owned();
    }

    let pathname = if is_http_href(value) {
        match Url::parse(value) {
            Ok(url) => url.path().to_owned(),
            Err(_) => return value.to_owned(),
        }
    } else {
        value.to_owned()
    };

    let pathname = pathname.split(['#', '?']).next().unwrap_or_default();
    let trimmed = pathname.trim_end_matches('/');

    match trimmed {
        "" => "/".to_owned(),
        p if p.starts_with('/') => p.to_owned(),
        p => format!("/{p}"),
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The supported locale named by the first path segment, if any.
pub fn locale_segment(path: &str) -> Option<Locale> {
    segments(&sanitize_path(path)).next().and_then(Locale::from_code)
}

/// Strips a leading locale segment: `/zh-HK/events` becomes `/events`, `/en` becomes `/`.
pub fn normalize_localized_path(path: &str) -> String {
    let value = sanitize_path(path);
    if segments(&value).next().and_then(Locale::from_code).is_none() {
        return value;
    }

    let rest: Vec<&str> = segments(&value).skip(1).collect();
    if rest.is_empty() { "/".to_owned() } else { format!("/{}", rest.join("/")) }
}

/// Prefixes a path with `locale`, replacing any locale prefix already present.
pub fn localize_path(path: &str, locale: Locale) -> String {
    match normalize_localized_path(path).as_str() {
        "/" => format!("/{locale}"),
        base => format!("/{locale}{base}"),
    }
}

/// Localizes an href from content while keeping its query and fragment.
///
/// External links (`http(s)`, `mailto:`, `tel:`) and a bare `#` are returned unchanged.
pub fn localize_href(href: &str, locale: Locale) -> String {
    let value = href.trim();
    if value.is_empty() {
        return "/".to_owned();
    }
    if value == "#" || is_external_href(value) {
        return value.to_owned();
    }

    let (without_hash, hash) = value.find('#').map_or((value, ""), |i| value.split_at(i));
    let (pathname, query) =
        without_hash.find('?').map_or((without_hash, ""), |i| without_hash.split_at(i));
    let pathname = if pathname.is_empty() { "/" } else { pathname };

    format!("{}{query}{hash}", localize_path(pathname, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_paths() {
        assert_eq!(sanitize_path(""), "/");
        assert_eq!(sanitize_path("  #  "), "#");
        assert_eq!(sanitize_path("events/"), "/events");
        assert_eq!(sanitize_path("/about-us///"), "/about-us");
        assert_eq!(sanitize_path("/zh-HK/events?month=3#top"), "/zh-HK/events");
        assert_eq!(sanitize_path("https://www.evolvesprouts.com/zh-CN/contact-us?x=1"), "/zh-CN/contact-us");
        assert_eq!(sanitize_path("https://www.evolvesprouts.com"), "/");
    }

    #[test]
    fn resolves_supported_first_segment() {
        let resolver = LocaleResolver::new(Locale::En);
        assert_eq!(resolver.locale_from_path("/zh-HK/events"), Locale::ZhHk);
        assert_eq!(resolver.locale_from_path("zh-CN"), Locale::ZhCn);
        assert_eq!(resolver.resolve("/en/about-us").direction, Direction::Ltr);
    }

    #[test]
    fn falls_back_to_configured_default() {
        let resolver = LocaleResolver::new(Locale::ZhHk);
        assert_eq!(resolver.locale_from_path("/"), Locale::ZhHk);
        assert_eq!(resolver.locale_from_path("/fr/events"), Locale::ZhHk);
        assert_eq!(resolver.locale_from_path("/zh-hk/events"), Locale::ZhHk);
        assert_eq!(resolver.locale_from_path("/events/en"), Locale::ZhHk);
    }

    #[test]
    fn strips_locale_prefix() {
        assert_eq!(normalize_localized_path("/zh-HK/events"), "/events");
        assert_eq!(normalize_localized_path("/en"), "/");
        assert_eq!(normalize_localized_path("/en/services/workshops/"), "/services/workshops");
        assert_eq!(normalize_localized_path("/events"), "/events");
        assert_eq!(normalize_localized_path("zh-CN/"), "/");
        assert_eq!(normalize_localized_path("#"), "#");
    }

    #[test]
    fn localizes_paths() {
        assert_eq!(localize_path("/", Locale::En), "/en");
        assert_eq!(localize_path("/about-us", Locale::ZhCn), "/zh-CN/about-us");
        assert_eq!(localize_path("/zh-HK/events", Locale::En), "/en/events");
        assert_eq!(localize_path("https://www.evolvesprouts.com/zh-CN/contact-us", Locale::ZhHk), "/zh-HK/contact-us");
        assert_eq!(localize_path("#", Locale::En), "/en#");
    }

    #[test]
    fn localizes_hrefs() {
        assert_eq!(localize_href("", Locale::En), "/");
        assert_eq!(localize_href("#", Locale::En), "#");
        assert_eq!(localize_href("#resources", Locale::ZhHk), "/zh-HK#resources");
        assert_eq!(localize_href("/events?month=3#list", Locale::ZhCn), "/zh-CN/events?month=3#list");
        assert_eq!(localize_href("https://wa.me/852", Locale::ZhCn), "https://wa.me/852");
        assert_eq!(localize_href("mailto:hello@evolvesprouts.com", Locale::En), "mailto:hello@evolvesprouts.com");
    }
}
