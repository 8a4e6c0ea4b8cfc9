use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use sprouts_domain::Locale;
use sprouts_seo::routes::{INDEXED_ROUTES, PLACEHOLDER_ROUTES};
use sprouts_seo::sitemap::build_sitemap;
use strum::IntoEnumIterator;

const ORIGIN: &str = "https://www.evolvesprouts.com";

#[test]
fn sitemap_covers_every_locale_and_indexed_route() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
    let entries = build_sitemap(ORIGIN, now);

    assert_eq!(entries.len(), Locale::iter().len() * INDEXED_ROUTES.len());
    for locale in Locale::iter() {
        for route in INDEXED_ROUTES {
            let url = format!("{ORIGIN}{}", route.localized(locale));
            assert!(entries.iter().any(|e| e.url == url), "missing {url}");
        }
    }
}

#[test]
fn sitemap_never_lists_placeholders() {
    let entries = build_sitemap(ORIGIN, Utc::now());

    for locale in Locale::iter() {
        for route in PLACEHOLDER_ROUTES {
            let url = format!("{ORIGIN}{}", route.localized(locale));
            assert!(entries.iter().all(|e| e.url != url), "{url} must stay out of the sitemap");
        }
    }
}

proptest! {
    #[test]
    fn entries_stay_on_the_configured_origin(host in "[a-z]{1,12}\\.(com|org|hk)") {
        let origin = format!("https://{host}");
        let entries = build_sitemap(&origin, Utc::now());

        let prefix = format!("{origin}/");

        prop_assert_eq!(entries.len(), Locale::iter().len() * INDEXED_ROUTES.len());
        for entry in &entries {
            prop_assert!(entry.url.starts_with(&prefix), "{} is off-origin", entry.url);
        }
    }
}
