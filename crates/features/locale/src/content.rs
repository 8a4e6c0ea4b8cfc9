//! Locale content bundles.
//!
//! Each supported locale ships a JSON bundle embedded at compile time. Bundles are parsed
//! once into [`SiteContent`], so every locale is guaranteed to have the same shape, and
//! are never mutated afterwards.

use crate::error::{LocaleError, LocaleErrorExt};
use serde::{Deserialize, Serialize};
use sprouts_domain::{Direction, Locale};
use strum::IntoEnumIterator;

const EN_BUNDLE: &str = include_str!("content/en.json");
const ZH_CN_BUNDLE: &str = include_str!("content/zh-CN.json");
const ZH_HK_BUNDLE: &str = include_str!("content/zh-HK.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub meta: MetaContent,
    pub navbar: NavbarContent,
    pub footer: FooterContent,
    pub pages: PagesContent,
    pub seo: SeoContent,
    pub noscript: NoscriptContent,
    pub not_found: NotFoundContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MetaContent {
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LinkGroup {
    pub title: String,
    pub items: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NavbarContent {
    pub brand: String,
    pub menu_items: Vec<LinkItem>,
    pub book_now: LinkItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub quick_links: LinkGroup,
    pub services: LinkGroup,
    pub about_us: LinkGroup,
    pub connect_on: LinkGroup,
    pub copyright: String,
}

impl FooterContent {
    /// Link groups in display order.
    pub fn groups(&self) -> [&LinkGroup; 4] {
        [&self.quick_links, &self.services, &self.about_us, &self.connect_on]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageCopy {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PagesContent {
    pub home: PageCopy,
    pub about_us: PageCopy,
    pub contact_us: PageCopy,
    pub events: PageCopy,
    pub training_course: PageCopy,
    pub privacy: PageCopy,
    pub workshops: PageCopy,
    pub terms: PageCopy,
}

impl PagesContent {
    fn all(&self) -> [(&'static str, &PageCopy); 8] {
        [
            ("home", &self.home),
            ("aboutUs", &self.about_us),
            ("contactUs", &self.contact_us),
            ("events", &self.events),
            ("trainingCourse", &self.training_course),
            ("privacy", &self.privacy),
            ("workshops", &self.workshops),
            ("terms", &self.terms),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    pub organization_description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoscriptContent {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NotFoundContent {
    pub title: String,
    pub description: String,
    pub back_home_label: String,
}

/// Every locale's bundle, parsed and validated.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    en: SiteContent,
    zh_cn: SiteContent,
    zh_hk: SiteContent,
}

impl ContentCatalog {
    /// Parses the bundles compiled into the binary.
    ///
    /// # Errors
    /// Fails if a bundle is malformed or does not pass [`ContentCatalog::validate`].
    pub fn embedded() -> Result<Self, LocaleError> {
        Self::from_sources(EN_BUNDLE, ZH_CN_BUNDLE, ZH_HK_BUNDLE)
    }

    /// Parses and validates bundles from raw JSON, one per supported locale.
    ///
    /// # Errors
    /// See [`ContentCatalog::embedded`].
    pub fn from_sources(en: &str, zh_cn: &str, zh_hk: &str) -> Result<Self, LocaleError> {
        let catalog = Self {
            en: parse(Locale::En, en)?,
            zh_cn: parse(Locale::ZhCn, zh_cn)?,
            zh_hk: parse(Locale::ZhHk, zh_hk)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub const fn content(&self, locale: Locale) -> &SiteContent {
        match locale {
            Locale::En => &self.en,
            Locale::ZhCn => &self.zh_cn,
            Locale::ZhHk => &self.zh_hk,
        }
    }

    /// Looks up a bundle by its raw locale code.
    ///
    /// # Errors
    /// [`LocaleError::UnsupportedLocale`] when `code` is not a supported locale.
    pub fn content_for(&self, code: &str) -> Result<(Locale, &SiteContent), LocaleError> {
        Locale::from_code(code)
            .map(|locale| (locale, self.content(locale)))
            .ok_or_else(|| LocaleError::UnsupportedLocale { code: code.to_owned(), context: None })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locale, &SiteContent)> {
        Locale::iter().map(|locale| (locale, self.content(locale)))
    }

    /// Checks the invariants rendering relies on.
    ///
    /// Title, description, brand and every page title must be non-blank, and
    /// `meta.direction` must agree with the locale's static direction.
    ///
    /// # Errors
    /// [`LocaleError::Validation`] naming the first offending locale and field.
    pub fn validate(&self) -> Result<(), LocaleError> {
        for (locale, content) in self.iter() {
            validate_bundle(content).context(format!("Locale {locale}"))?;

            if content.meta.direction != locale.direction() {
                return Err(LocaleError::Validation {
                    message: format!(
                        "meta.direction is {} but {locale} is {}",
                        content.meta.direction,
                        locale.direction()
                    )
                    .into(),
                    context: None,
                });
            }
        }
        Ok(())
    }
}

fn parse(locale: Locale, raw: &str) -> Result<SiteContent, LocaleError> {
    serde_json::from_str(raw).context(format!("Parsing {locale} bundle"))
}

fn validate_bundle(content: &SiteContent) -> Result<(), LocaleError> {
    let required = [
        ("meta.title", content.meta.title.as_str()),
        ("meta.description", content.meta.description.as_str()),
        ("navbar.brand", content.navbar.brand.as_str()),
        ("notFound.title", content.not_found.title.as_str()),
    ]
    .into_iter()
    .chain(content.pages.all().map(|(key, page)| (key, page.title.as_str())));

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(LocaleError::Validation {
                message: format!("{field} must not be blank").into(),
                context: None,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundles_parse_and_validate() {
        let catalog = ContentCatalog::embedded().unwrap();
        for (locale, content) in catalog.iter() {
            assert_eq!(content.meta.direction, locale.direction());
            assert!(!content.navbar.menu_items.is_empty(), "{locale} has no menu");
        }
    }

    #[test]
    fn bundles_share_link_structure() {
        let catalog = ContentCatalog::embedded().unwrap();
        let hrefs = |locale| {
            catalog.content(locale).navbar.menu_items.iter().map(|i| i.href.clone()).collect::<Vec<_>>()
        };

        assert_eq!(hrefs(Locale::En), hrefs(Locale::ZhCn));
        assert_eq!(hrefs(Locale::En), hrefs(Locale::ZhHk));
    }

    #[test]
    fn lookup_by_code_is_exact() {
        let catalog = ContentCatalog::embedded().unwrap();

        let (locale, content) = catalog.content_for("zh-HK").unwrap();
        assert_eq!(locale, Locale::ZhHk);
        assert_eq!(content, catalog.content(Locale::ZhHk));

        let err = catalog.content_for("zh-hk").unwrap_err();
        assert!(matches!(err, LocaleError::UnsupportedLocale { ref code, .. } if code == "zh-hk"));
    }

    #[test]
    fn malformed_bundle_is_a_content_error() {
        let err = ContentCatalog::from_sources("{", ZH_CN_BUNDLE, ZH_HK_BUNDLE).unwrap_err();
        assert!(matches!(err, LocaleError::Content { context: Some(_), .. }));
        assert!(err.to_string().contains("Parsing en bundle"));
    }

    #[test]
    fn blank_title_fails_validation() {
        let mut value: serde_json::Value = serde_json::from_str(EN_BUNDLE).unwrap();
        value["meta"]["title"] = serde_json::Value::String("  ".into());

        let err = ContentCatalog::from_sources(&value.to_string(), ZH_CN_BUNDLE, ZH_HK_BUNDLE)
            .unwrap_err();
        assert!(err.to_string().contains("meta.title"));
        assert!(err.to_string().contains("Locale en"));
    }

    #[test]
    fn direction_mismatch_fails_validation() {
        let mut value: serde_json::Value = serde_json::from_str(ZH_HK_BUNDLE).unwrap();
        value["meta"]["direction"] = serde_json::Value::String("rtl".into());

        let err = ContentCatalog::from_sources(EN_BUNDLE, ZH_CN_BUNDLE, &value.to_string())
            .unwrap_err();
        assert!(matches!(err, LocaleError::Validation { .. }));
    }
}
