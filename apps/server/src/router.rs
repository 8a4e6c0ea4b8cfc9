use axum::Router;
use sprouts::domain::constants::{BOOKING_TAG, IDENTITY_TAG, LOCALE_TAG, SEO_TAG, SYSTEM_TAG};
use sprouts::kernel::server::SiteState;
use sprouts::server::router::{fallback_handler, feature_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub const DOCS_PATH: &str = "/api/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Evolve Sprouts", description = "Public site pages, content bundles and booking helpers"),
    tags(
        (name = SYSTEM_TAG, description = "Service health"),
        (name = LOCALE_TAG, description = "Locale resolution and content bundles"),
        (name = SEO_TAG, description = "Sitemap and crawler rules"),
        (name = BOOKING_TAG, description = "Discounted price quotes"),
        (name = IDENTITY_TAG, description = "Admin portal sign-in"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: SiteState) -> Router {
    // Separate the routes from the API documentation object
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(feature_router())
        .split_for_parts();

    routes
        .merge(Scalar::with_url(DOCS_PATH, api_doc))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
