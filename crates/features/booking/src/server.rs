use crate::Booking;
use crate::error::BookingError;
use crate::quote::{Quote, QuoteRequest};
use crate::reservation::ReservationPayload;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sprouts_domain::constants::BOOKING_TAG;
use sprouts_kernel::server::{ErrorBody, SiteState, error_response};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidQuote { message, .. } | Self::InvalidReservation { message, .. } => {
                error_response(StatusCode::BAD_REQUEST, message)
            },
            Self::State { source, .. } => source.into_response(),
        }
    }
}

/// CRM endpoints the booking form talks to; absent without an `https` CRM base URL.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrmEndpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts_api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations_api_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/booking/quote",
    request_body = QuoteRequest,
    responses(
        (status = OK, description = "Discounted total and formatted labels", body = Quote),
        (status = BAD_REQUEST, description = "Invalid base price", body = ErrorBody),
    ),
    tag = BOOKING_TAG,
)]
async fn quote_handler(
    State(state): State<SiteState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<Quote>, BookingError> {
    let booking = state.try_get_slice::<Booking>()?;
    let quote = booking.quote(&request)?;

    tracing::debug!(
        total = quote.total,
        discounted = quote.discount.is_some(),
        "Booking quote computed"
    );

    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/booking/endpoints",
    responses((status = OK, description = "Configured CRM endpoints", body = CrmEndpoints)),
    tag = BOOKING_TAG,
)]
async fn endpoints_handler(State(state): State<SiteState>) -> Result<Json<CrmEndpoints>, BookingError> {
    let booking = state.try_get_slice::<Booking>()?;

    Ok(Json(CrmEndpoints {
        discounts_api_url: booking.discounts_api_url.clone(),
        reservations_api_url: booking.reservations_api_url.clone(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/booking/reservations",
    request_body = ReservationPayload,
    responses(
        (status = OK, description = "Sanitized reservation ready for submission", body = ReservationPayload),
        (status = BAD_REQUEST, description = "Missing field or invalid total", body = ErrorBody),
    ),
    tag = BOOKING_TAG,
)]
async fn reservation_handler(
    State(state): State<SiteState>,
    Json(payload): Json<ReservationPayload>,
) -> Result<Json<ReservationPayload>, BookingError> {
    let booking = state.try_get_slice::<Booking>()?;
    let reservation = booking.prepare_reservation(&payload)?;

    tracing::debug!(package = %reservation.package_label, "Reservation payload prepared");

    Ok(Json(reservation))
}

pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(quote_handler))
        .routes(routes!(endpoints_handler))
        .routes(routes!(reservation_handler))
}
