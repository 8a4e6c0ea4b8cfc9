//! SEO feature slice.
//!
//! Owns the static route table and everything search engines read: localized page
//! metadata, the HTML document shell, JSON-LD, `sitemap.xml` and `robots.txt`.

pub mod document;
mod error;
pub mod escape;
pub mod metadata;
pub mod robots;
pub mod routes;
#[cfg(feature = "server")]
pub mod server;
pub mod sitemap;
pub mod structured_data;

pub use crate::error::{SeoError, SeoErrorExt};
pub use crate::metadata::{PageMetadata, RobotsDirective, build_localized_metadata};
pub use crate::routes::{INDEXED_ROUTES, PLACEHOLDER_ROUTES, Route, alias_redirect};

use crate::document::PageDocument;
use crate::structured_data::SchemaContext;
use chrono::{DateTime, Utc};
use sprouts_domain::Locale;
use sprouts_domain::config::SiteConfig;
use sprouts_kernel::domain::registry::InitializedSlice;
use sprouts_kernel::site::PublicSiteLinks;
use sprouts_locale::{PageContext, footer_link_label, menu_label};
use tracing::info;
use url::Url;

/// SEO feature state
#[sprouts_derive::sprouts_slice]
pub struct Seo {
    /// Normalized `scheme://host[:port]`, no trailing slash.
    pub origin: String,
    pub host: String,
    pub default_locale: Locale,
    pub links: PublicSiteLinks,
}

impl SeoInner {
    /// # Errors
    /// Fails if `site.origin` is not an absolute `http(s)` URL.
    pub fn from_config(config: &SiteConfig) -> Result<Self, SeoError> {
        let (origin, url_host) = normalize_origin(&config.site.origin)?;
        let host = match config.site.host.trim() {
            "" => url_host,
            host => host.to_owned(),
        };

        Ok(Self {
            origin,
            host,
            default_locale: config.site.default_locale,
            links: PublicSiteLinks::resolve(&config.social),
        })
    }

    /// Metadata for a canonical route; placeholders get a generated description.
    pub fn route_metadata(&self, page: &PageContext<'_>, route: Route) -> PageMetadata {
        let copy = route.page_copy(page.content);
        let visibility = route.visibility();

        let (title, description) = if visibility.is_indexed() {
            (copy.title.clone(), copy.description.clone())
        } else {
            let title = footer_link_label(page.content, route.path(), &copy.title);
            (title.to_owned(), metadata::placeholder_description(title))
        };

        build_localized_metadata(page.locale, self.default_locale, route.path(), title, description, visibility)
    }

    pub fn render_route(&self, page: PageContext<'_>, route: Route) -> String {
        let metadata = self.route_metadata(&page, route);
        let heading = menu_label(page.content, route.path(), &metadata.title);
        let schemas = self.schemas(&page, route, heading);

        PageDocument { origin: &self.origin, page, metadata: &metadata, heading, schemas }.render()
    }

    pub fn render_not_found(&self, page: PageContext<'_>) -> String {
        let copy = &page.content.not_found;
        let metadata = metadata::not_found_metadata(page.locale, &copy.title, &copy.description);

        PageDocument { origin: &self.origin, page, metadata: &metadata, heading: &copy.title, schemas: Vec::new() }
            .render()
    }

    fn schemas(&self, page: &PageContext<'_>, route: Route, heading: &str) -> Vec<serde_json::Value> {
        let ctx = SchemaContext { origin: &self.origin, locale: page.locale, content: page.content, links: &self.links };

        let mut schemas = vec![ctx.organization()];
        match route {
            Route::Home => schemas.push(ctx.local_business()),
            Route::TrainingCourse => schemas.push(ctx.course()),
            _ => {},
        }
        if route != Route::Home {
            let home = menu_label(page.content, Route::Home.path(), &page.content.pages.home.title);
            schemas.push(ctx.breadcrumbs(&[(home, Route::Home), (heading, route)]));
        }
        schemas
    }

    pub fn sitemap_xml(&self, now: DateTime<Utc>) -> String {
        sitemap::render_sitemap(&sitemap::build_sitemap(&self.origin, now))
    }

    pub fn robots_txt(&self) -> String {
        robots::render_robots(&self.origin, &self.host)
    }
}

/// Reduces a configured origin to `scheme://host[:port]` and returns it with its host.
///
/// # Errors
/// [`SeoError::Origin`] for unparsable input, [`SeoError::UnsupportedOrigin`] for
/// anything other than `http`/`https`.
pub fn normalize_origin(origin: &str) -> Result<(String, String), SeoError> {
    let url = Url::parse(origin.trim()).context("site.origin")?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SeoError::UnsupportedOrigin {
            message: format!("expected http or https, got '{}'", url.scheme()).into(),
            context: Some("site.origin".into()),
        });
    }

    let host = url.host_str().unwrap_or_default().to_owned();
    Ok((url.origin().ascii_serialization(), host))
}

/// Initialize the SEO feature.
///
/// # Errors
/// Fails if the configured site origin is invalid.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, SeoError> {
    let slice = Seo::new(SeoInner::from_config(config)?);

    info!(
        origin = %slice.origin,
        indexed = INDEXED_ROUTES.len(),
        placeholders = PLACEHOLDER_ROUTES.len(),
        "SEO slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}
