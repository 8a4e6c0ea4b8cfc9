use crate::error::LocaleError;
use crate::resolver::{ResolvedLocale, normalize_localized_path};
use crate::{Locales, SiteContent};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use sprouts_domain::constants::LOCALE_TAG;
use sprouts_kernel::server::{ErrorBody, SiteState, error_response};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

impl IntoResponse for LocaleError {
    fn into_response(self) -> Response {
        match self {
            Self::UnsupportedLocale { code, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("Unsupported locale: {code}"))
            },
            Self::State { source, .. } => source.into_response(),
            other => {
                tracing::error!(error = %other, "Locale request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Content unavailable")
            },
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LocaleQuery {
    /// Path or absolute URL to resolve
    #[param(example = "/zh-HK/events")]
    path: Option<String>,
}

/// Locale resolved for a path
#[derive(Debug, Serialize, ToSchema)]
pub struct LocaleResponse {
    #[serde(flatten)]
    resolved: ResolvedLocale,
    /// The path without its locale prefix
    path: String,
}

#[utoipa::path(
    get,
    path = "/api/locale",
    params(LocaleQuery),
    responses((status = OK, description = "Active locale and text direction", body = LocaleResponse)),
    tag = LOCALE_TAG,
)]
async fn resolve_handler(
    State(state): State<SiteState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<LocaleResponse>, LocaleError> {
    let locales = state.try_get_slice::<Locales>()?;
    let path = query.path.unwrap_or_default();

    Ok(Json(LocaleResponse {
        resolved: locales.resolver.resolve(&path),
        path: normalize_localized_path(&path),
    }))
}

#[utoipa::path(
    get,
    path = "/api/content/{locale}",
    params(("locale" = String, Path, description = "Locale code", example = "zh-CN")),
    responses(
        (status = OK, description = "Content bundle", body = SiteContent),
        (status = NOT_FOUND, description = "Unsupported locale", body = ErrorBody),
    ),
    tag = LOCALE_TAG,
)]
async fn content_handler(
    State(state): State<SiteState>,
    Path(locale): Path<String>,
) -> Result<Response, LocaleError> {
    let locales = state.try_get_slice::<Locales>()?;
    let (_, content) = locales.catalog.content_for(&locale)?;

    Ok(([(header::CACHE_CONTROL, "public, max-age=300")], Json(content)).into_response())
}

#[utoipa::path(
    get,
    path = "/scripts/locale-document.js",
    responses((status = OK, description = "Sets <html lang dir> from the path", content_type = "text/javascript")),
    tag = LOCALE_TAG,
)]
async fn document_script_handler(State(state): State<SiteState>) -> Result<Response, LocaleError> {
    let locales = state.try_get_slice::<Locales>()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        locales.document_script.clone(),
    )
        .into_response())
}

pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(resolve_handler))
        .routes(routes!(content_handler))
        .routes(routes!(document_script_handler))
}
