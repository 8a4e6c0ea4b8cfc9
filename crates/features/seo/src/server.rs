use crate::Seo;
use crate::error::SeoError;
use crate::routes::{Route, alias_redirect};
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use sprouts_domain::constants::SEO_TAG;
use sprouts_kernel::server::{SiteState, error_response};
use sprouts_locale::resolver::sanitize_path;
use sprouts_locale::{LocaleError, Locales, PageContext, resolve_page_context};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const PAGE_CACHE_CONTROL: &str = "public, max-age=300";

impl IntoResponse for SeoError {
    fn into_response(self) -> Response {
        match self {
            Self::State { source, .. } => source.into_response(),
            other => {
                tracing::error!(error = %other, "SEO request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Page unavailable")
            },
        }
    }
}

fn html(status: StatusCode, body: String) -> Response {
    (status, [(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)], Html(body)).into_response()
}

/// Renders the part of the path after the locale segment.
fn render_path(seo: &Seo, page: PageContext<'_>, path: &str) -> Response {
    let path = sanitize_path(path);

    if let Some(route) = Route::from_path(&path) {
        return html(StatusCode::OK, seo.render_route(page, route));
    }
    if let Some(target) = alias_redirect(&path, page.locale) {
        return Redirect::permanent(&target).into_response();
    }
    html(StatusCode::NOT_FOUND, seo.render_not_found(page))
}

fn slices(state: &SiteState) -> Result<(&Seo, &Locales), SeoError> {
    Ok((state.try_get_slice::<Seo>()?, state.try_get_slice::<Locales>()?))
}

async fn root_handler(State(state): State<SiteState>) -> Result<Redirect, SeoError> {
    let seo = state.try_get_slice::<Seo>()?;
    Ok(Redirect::permanent(&Route::Home.localized(seo.default_locale)))
}

async fn locale_home_handler(
    State(state): State<SiteState>,
    Path(locale): Path<String>,
) -> Result<Response, SeoError> {
    let (seo, locales) = slices(&state)?;
    Ok(match resolve_page_context(&locales.catalog, &locale) {
        Ok(page) => render_path(seo, page, "/"),
        Err(err) => not_found(seo, locales, &err),
    })
}

async fn locale_page_handler(
    State(state): State<SiteState>,
    Path((locale, path)): Path<(String, String)>,
) -> Result<Response, SeoError> {
    let (seo, locales) = slices(&state)?;
    Ok(match resolve_page_context(&locales.catalog, &locale) {
        Ok(page) => render_path(seo, page, &path),
        Err(err) => not_found(seo, locales, &err),
    })
}

fn not_found(seo: &Seo, locales: &Locales, err: &LocaleError) -> Response {
    tracing::debug!(error = %err, "Unsupported locale requested");
    let locale = seo.default_locale;
    let page = PageContext {
        locale,
        direction: locale.direction(),
        content: locales.catalog.content(locale),
    };
    html(StatusCode::NOT_FOUND, seo.render_not_found(page))
}

/// Localized not-found page for any unmatched path.
pub async fn fallback_handler(State(state): State<SiteState>, uri: Uri) -> Result<Response, SeoError> {
    let (seo, locales) = slices(&state)?;
    let locale = locales.resolver.locale_from_path(uri.path());
    let page = PageContext { locale, direction: locale.direction(), content: locales.catalog.content(locale) };

    Ok(html(StatusCode::NOT_FOUND, seo.render_not_found(page)))
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses((status = OK, description = "Sitemap of every locale and indexed route", content_type = "application/xml")),
    tag = SEO_TAG,
)]
async fn sitemap_handler(State(state): State<SiteState>) -> Result<Response, SeoError> {
    let seo = state.try_get_slice::<Seo>()?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8"), (header::CACHE_CONTROL, "public, max-age=3600")],
        seo.sitemap_xml(chrono::Utc::now()),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses((status = OK, description = "Crawler rules", content_type = "text/plain")),
    tag = SEO_TAG,
)]
async fn robots_handler(State(state): State<SiteState>) -> Result<Response, SeoError> {
    let seo = state.try_get_slice::<Seo>()?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], seo.robots_txt()).into_response())
}

pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(sitemap_handler))
        .routes(routes!(robots_handler))
        .route("/", get(root_handler))
        .route("/{locale}", get(locale_home_handler))
        .route("/{locale}/", get(locale_home_handler))
        .route("/{locale}/{*path}", get(locale_page_handler))
}
