//! Locale feature slice.
//!
//! Resolves the active locale from a request path, localizes internal links and serves the
//! per-locale content bundles. The supported set is fixed (`en`, `zh-CN`, `zh-HK`); the
//! default comes from `site.default_locale`.

pub mod content;
pub mod document;
mod error;
pub mod page;
pub mod resolver;
#[cfg(feature = "server")]
pub mod server;

pub use crate::content::{ContentCatalog, SiteContent};
pub use crate::error::{LocaleError, LocaleErrorExt};
pub use crate::page::{PageContext, footer_link_label, menu_label, resolve_page_context};
pub use crate::resolver::{
    LocaleResolver, ResolvedLocale, localize_href, localize_path, normalize_localized_path,
};

use sprouts_domain::config::SiteConfig;
use sprouts_kernel::domain::registry::InitializedSlice;
use strum::IntoEnumIterator;
use tracing::info;

/// Locale feature state
#[sprouts_derive::sprouts_slice]
pub struct Locales {
    pub resolver: LocaleResolver,
    pub catalog: ContentCatalog,
    /// Pre-rendered document attribute script.
    pub document_script: String,
}

impl LocalesInner {
    /// # Errors
    /// Fails if the embedded content bundles are malformed or invalid.
    pub fn from_config(config: &SiteConfig) -> Result<Self, LocaleError> {
        let default = config.site.default_locale;
        Ok(Self {
            resolver: LocaleResolver::new(default),
            catalog: ContentCatalog::embedded()?,
            document_script: document::build_document_attributes_script(default),
        })
    }
}

/// Initialize the locale feature.
///
/// # Errors
/// Fails if the embedded content bundles are malformed or invalid.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, LocaleError> {
    let slice = Locales::new(LocalesInner::from_config(config)?);

    info!(
        default_locale = %slice.resolver.default_locale(),
        locales = sprouts_domain::Locale::iter().len(),
        "Locale slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}
