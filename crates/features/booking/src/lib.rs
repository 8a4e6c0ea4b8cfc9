//! Booking feature slice.
//!
//! Discount rules come from `booking.discounts` in configuration; quotes apply them to a
//! package price and format the result in whole Hong Kong dollars.

pub mod discount;
mod error;
pub mod format;
pub mod quote;
pub mod reservation;
#[cfg(feature = "server")]
pub mod server;

pub use crate::discount::{DiscountRule, apply_discount, find_rule};
pub use crate::error::{BookingError, BookingErrorExt};
pub use crate::format::format_currency_hkd;
pub use crate::quote::{Quote, QuoteRequest, build_quote};
pub use crate::reservation::ReservationPayload;

use sprouts_domain::Locale;
use sprouts_domain::config::SiteConfig;
use sprouts_kernel::domain::registry::InitializedSlice;
use tracing::{info, warn};

/// Booking feature state
#[sprouts_derive::sprouts_slice]
pub struct Booking {
    pub rules: Vec<DiscountRule>,
    pub default_locale: Locale,
    /// CRM discounts endpoint, when an `https` base URL is configured.
    pub discounts_api_url: Option<String>,
    pub reservations_api_url: Option<String>,
}

impl BookingInner {
    pub fn from_config(config: &SiteConfig) -> Self {
        let booking = &config.booking;
        let base = booking.crm_api_base_url.as_deref().unwrap_or_default();
        let endpoint = |url: String| (!url.is_empty()).then_some(url);

        if !base.trim().is_empty() && discount::build_discounts_api_url(base).is_empty() {
            warn!(crm_api_base_url = %base, "Ignoring CRM API base URL, https is required");
        }

        Self {
            rules: discount::normalize_static_discount_rules(&booking.discounts),
            default_locale: config.site.default_locale,
            discounts_api_url: endpoint(discount::build_discounts_api_url(base)),
            reservations_api_url: endpoint(reservation::build_reservations_api_url(base)),
        }
    }

    /// # Errors
    /// See [`build_quote`].
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, BookingError> {
        build_quote(&self.rules, request, self.default_locale)
    }

    /// Sanitized copy of `payload`, ready for the CRM reservations endpoint.
    ///
    /// # Errors
    /// [`BookingError::InvalidReservation`] when a required field is blank after
    /// sanitizing or the total is not a non-negative number.
    pub fn prepare_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> Result<ReservationPayload, BookingError> {
        let clean = payload.sanitized();
        clean.validate()?;
        Ok(clean)
    }
}

/// Initialize the booking feature.
///
/// # Errors
/// Currently infallible; kept fallible like every other slice initializer.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, BookingError> {
    let slice = Booking::new(BookingInner::from_config(config));

    info!(
        discount_rules = slice.rules.len(),
        crm = slice.discounts_api_url.is_some(),
        "Booking slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprouts_domain::config::{DiscountKind, StaticDiscountRule};

    #[test]
    fn default_config_has_sprouts10() {
        let booking = BookingInner::from_config(&SiteConfig::default());
        assert!(find_rule(&booking.rules, "sprouts10").is_some());
        assert_eq!(booking.discounts_api_url, None);
    }

    #[test]
    fn reads_rules_and_crm_endpoints() {
        let mut config = SiteConfig::default();
        config.booking.discounts = vec![
            StaticDiscountRule { code: "EARLY".into(), kind: DiscountKind::Amount, value: 1000.0 },
            StaticDiscountRule { code: String::new(), kind: DiscountKind::Amount, value: 1.0 },
        ];
        config.booking.crm_api_base_url = Some("https://crm.evolvesprouts.com/".into());

        let booking = BookingInner::from_config(&config);
        assert_eq!(booking.rules.len(), 1);
        assert_eq!(booking.discounts_api_url.as_deref(), Some("https://crm.evolvesprouts.com/v1/discounts"));
        assert_eq!(booking.reservations_api_url.as_deref(), Some("https://crm.evolvesprouts.com/v1/reservations"));
    }

    #[test]
    fn prepared_reservation_is_sanitized_and_checked() {
        let booking = BookingInner::from_config(&SiteConfig::default());
        let payload = ReservationPayload {
            attendee_name: " Mei \n Chan ".into(),
            attendee_email: "mei@example.com".into(),
            attendee_phone: "91234567".into(),
            package_label: "Full course".into(),
            month_label: "April".into(),
            total_amount: 8100.0,
            ..ReservationPayload::default()
        };

        let clean = booking.prepare_reservation(&payload).unwrap();
        assert_eq!(clean.attendee_name, "Mei Chan");

        let blank = ReservationPayload { month_label: " \t ".into(), ..payload };
        let err = booking.prepare_reservation(&blank).unwrap_err();
        assert!(err.to_string().contains("monthLabel"));
    }

    #[test]
    fn plain_http_crm_is_ignored() {
        let mut config = SiteConfig::default();
        config.booking.crm_api_base_url = Some("http://crm.evolvesprouts.com".into());
        assert_eq!(BookingInner::from_config(&config).discounts_api_url, None);
    }
}
