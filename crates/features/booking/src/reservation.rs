//! Reservation submission payload for the CRM reservations endpoint.

use crate::discount::crm_endpoint_url;
use crate::error::BookingError;
use serde::{Deserialize, Serialize};

pub const RESERVATIONS_API_PATH: &str = "/v1/reservations";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub attendee_name: String,
    pub attendee_email: String,
    pub attendee_phone: String,
    pub child_age_group: String,
    pub package_label: String,
    pub month_label: String,
    pub payment_method: String,
    pub total_amount: f64,
    pub course_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_time_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interested_topics: Option<String>,
}

/// Collapses whitespace runs to one space and trims.
pub fn sanitize_single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn sanitize_optional(value: Option<&String>) -> Option<String> {
    value.map(|v| sanitize_single_line(v)).filter(|v| !v.is_empty())
}

impl ReservationPayload {
    /// Copy with every text field reduced to a single trimmed line.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            attendee_name: sanitize_single_line(&self.attendee_name),
            attendee_email: sanitize_single_line(&self.attendee_email),
            attendee_phone: sanitize_single_line(&self.attendee_phone),
            child_age_group: sanitize_single_line(&self.child_age_group),
            package_label: sanitize_single_line(&self.package_label),
            month_label: sanitize_single_line(&self.month_label),
            payment_method: sanitize_single_line(&self.payment_method),
            total_amount: self.total_amount,
            course_label: sanitize_single_line(&self.course_label),
            schedule_date_label: sanitize_optional(self.schedule_date_label.as_ref()),
            schedule_time_label: sanitize_optional(self.schedule_time_label.as_ref()),
            interested_topics: sanitize_optional(self.interested_topics.as_ref()),
        }
    }

    /// Checks the fields a submission cannot go out without.
    ///
    /// # Errors
    /// [`BookingError::InvalidReservation`] naming the first missing field, or for a
    /// negative or non-finite total.
    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [
            ("attendeeName", &self.attendee_name),
            ("attendeeEmail", &self.attendee_email),
            ("attendeePhone", &self.attendee_phone),
            ("packageLabel", &self.package_label),
            ("monthLabel", &self.month_label),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BookingError::InvalidReservation {
                message: format!("{field} is required").into(),
                context: None,
            });
        }

        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(BookingError::InvalidReservation {
                message: "totalAmount must be a non-negative number".into(),
                context: None,
            });
        }

        Ok(())
    }
}

pub fn build_reservations_api_url(crm_api_base_url: &str) -> String {
    crm_endpoint_url(crm_api_base_url, RESERVATIONS_API_PATH)
}
