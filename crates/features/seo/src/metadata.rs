//! Localized page metadata: canonical URL, hreflang alternates and robots directives.

use serde::Serialize;
use sprouts_domain::constants::SITE_NAME;
use sprouts_domain::{Locale, RouteVisibility};
use sprouts_locale::{localize_path, normalize_localized_path};
use std::fmt;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotsDirective {
    pub index: bool,
    pub follow: bool,
}

impl RobotsDirective {
    pub const INDEX: Self = Self { index: true, follow: true };
    pub const PLACEHOLDER: Self = Self { index: false, follow: true };
    pub const NOT_FOUND: Self = Self { index: false, follow: false };

    pub const fn for_visibility(visibility: RouteVisibility) -> Self {
        match visibility {
            RouteVisibility::Indexed => Self::INDEX,
            RouteVisibility::Placeholder => Self::PLACEHOLDER,
        }
    }
}

impl fmt::Display for RobotsDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        write!(f, "{index},{follow}")
    }
}

/// One `<link rel="alternate" hreflang>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

pub const X_DEFAULT: &str = "x-default";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Locale-prefixed path, relative to the site origin.
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub robots: RobotsDirective,
}

/// Paths of `path` in every supported locale, plus `x-default` for `default`.
pub fn build_locale_alternates(path: &str, default: Locale) -> Vec<Alternate> {
    let base = normalize_localized_path(path);
    Locale::iter()
        .map(|locale| Alternate { hreflang: locale.as_str(), href: localize_path(&base, locale) })
        .chain(std::iter::once(Alternate { hreflang: X_DEFAULT, href: localize_path(&base, default) }))
        .collect()
}

pub fn build_localized_metadata(
    locale: Locale,
    default: Locale,
    path: &str,
    title: impl Into<String>,
    description: impl Into<String>,
    visibility: RouteVisibility,
) -> PageMetadata {
    PageMetadata {
        title: title.into(),
        description: description.into(),
        canonical: localize_path(path, locale),
        alternates: build_locale_alternates(path, default),
        robots: RobotsDirective::for_visibility(visibility),
    }
}

/// Generated description for unfinished pages.
pub fn placeholder_description(title: &str) -> String {
    format!("{title} — {SITE_NAME}")
}

/// The not-found page is never indexed and has no alternates.
pub fn not_found_metadata(locale: Locale, title: &str, description: &str) -> PageMetadata {
    PageMetadata {
        title: title.to_owned(),
        description: description.to_owned(),
        canonical: localize_path("/", locale),
        alternates: Vec::new(),
        robots: RobotsDirective::NOT_FOUND,
    }
}

impl PageMetadata {
    /// Absolute form of a site-relative href.
    pub fn absolute(origin: &str, href: &str) -> String {
        format!("{}{href}", origin.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_cover_every_locale_and_default() {
        let alternates = build_locale_alternates("/zh-HK/events", Locale::En);
        let pairs: Vec<(&str, &str)> =
            alternates.iter().map(|a| (a.hreflang, a.href.as_str())).collect();

        assert_eq!(
            pairs,
            vec![
                ("en", "/en/events"),
                ("zh-CN", "/zh-CN/events"),
                ("zh-HK", "/zh-HK/events"),
                ("x-default", "/en/events"),
            ]
        );
    }

    #[test]
    fn metadata_follows_visibility() {
        let indexed = build_localized_metadata(
            Locale::ZhCn,
            Locale::En,
            "/about-us",
            "About",
            "desc",
            RouteVisibility::Indexed,
        );
        assert_eq!(indexed.canonical, "/zh-CN/about-us");
        assert_eq!(indexed.robots.to_string(), "index,follow");

        let placeholder = build_localized_metadata(
            Locale::En,
            Locale::En,
            "/terms",
            "Terms",
            placeholder_description("Terms"),
            RouteVisibility::Placeholder,
        );
        assert_eq!(placeholder.robots.to_string(), "noindex,follow");
        assert_eq!(placeholder.description, "Terms — Evolve Sprouts");
    }

    #[test]
    fn not_found_is_noindex_nofollow() {
        let meta = not_found_metadata(Locale::ZhHk, "找不到頁面", "");
        assert_eq!(meta.robots.to_string(), "noindex,nofollow");
        assert!(meta.alternates.is_empty());
        assert_eq!(PageMetadata::absolute("https://www.evolvesprouts.com/", &meta.canonical), "https://www.evolvesprouts.com/zh-HK");
    }
}
