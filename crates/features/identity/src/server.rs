use crate::Identity;
use crate::error::IdentityError;
use crate::pkce::{CHALLENGE_METHOD, PkcePair};
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sprouts_domain::constants::IDENTITY_TAG;
use sprouts_kernel::safe_nanoid;
use sprouts_kernel::server::{SiteState, error_response};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::State { source, .. } => source.into_response(),
            other => {
                tracing::error!(error = %other, "Identity request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Sign-in unavailable")
            },
        }
    }
}

/// A fresh PKCE pair, plus the hosted sign-in URL when configured
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PkceResponse {
    #[serde(flatten)]
    pair: PkcePair,
    #[schema(value_type = String, example = "S256")]
    challenge_method: &'static str,
    /// Opaque value to compare on the callback
    state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    authorize_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/identity/pkce",
    responses((status = OK, description = "PKCE pair and sign-in URL", body = PkceResponse)),
    tag = IDENTITY_TAG,
)]
async fn pkce_handler(State(state): State<SiteState>) -> Result<Response, IdentityError> {
    let identity = state.try_get_slice::<Identity>()?;
    let pair = PkcePair::generate();
    let nonce = safe_nanoid!(24);

    let authorize_url = match &identity.client {
        Some(client) => Some(client.authorize_url(&pair, &nonce)?.to_string()),
        None => None,
    };

    let body = PkceResponse { pair, challenge_method: CHALLENGE_METHOD, state: nonce, authorize_url };
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(body)).into_response())
}

pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new().routes(routes!(pkce_handler))
}
