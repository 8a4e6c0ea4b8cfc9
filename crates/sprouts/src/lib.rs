//! Facade crate for Evolve Sprouts features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `sprouts` with the `server` feature for the HTTP routers.
//! - Call [`init`] to build every feature slice from a [`SiteConfig`].

pub use sprouts_domain as domain;
use sprouts_domain::config::SiteConfig;
use sprouts_domain::registry::InitializedSlice;
pub use sprouts_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use sprouts_kernel::server::SiteState;
        pub use sprouts_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Every feature router, merged. Page routes are included but not documented.
        pub fn feature_router() -> OpenApiRouter<SiteState> {
            OpenApiRouter::new()
                .merge(sprouts_locale::server::router())
                .merge(sprouts_seo::server::router())
                .merge(sprouts_booking::server::router())
                .merge(sprouts_identity::server::router())
        }

        pub use sprouts_seo::server::fallback_handler;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sprouts_booking as booking;
    pub use sprouts_identity as identity;
    pub use sprouts_locale as locale;
    pub use sprouts_seo as seo;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "locale",
        "seo",
        "booking",
        "identity",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &SiteConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![
        // Locale resolution and content bundles
        features::locale::init(config)?,
        // Route table, metadata, sitemap and robots
        features::seo::init(config)?,
        // Discounts and quotes
        features::booking::init(config)?,
        // PKCE and hosted sign-in
        features::identity::init(config)?,
    ];

    Ok(slices)
}
