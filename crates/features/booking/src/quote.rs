use crate::discount::{DiscountRule, find_rule, normalize_discounts_payload};
use crate::error::BookingError;
use crate::format::format_currency_hkd;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sprouts_domain::Locale;

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[cfg_attr(feature = "server", schema(example = 9000.0))]
    pub base_price: f64,
    #[cfg_attr(feature = "server", schema(example = "sprouts10"))]
    #[serde(default)]
    pub discount_code: Option<String>,
    #[cfg_attr(feature = "server", schema(example = "zh-HK"))]
    #[serde(default)]
    pub locale: Option<String>,
    /// Response body the client fetched from the CRM discounts endpoint.
    /// Its rules are matched before the configured ones.
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    #[serde(default)]
    pub crm_discounts: Option<Value>,
}

/// Price breakdown for a package with an optional discount code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "zh-HK"))]
    pub locale: Locale,
    pub base_price: f64,
    pub total: f64,
    pub discount_amount: f64,
    /// The matched rule; absent when no code was given or it is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountRule>,
    pub formatted_base_price: String,
    pub formatted_total: String,
}

/// Prices `request` against `rules`. Unknown codes leave the price unchanged.
///
/// # Errors
/// [`BookingError::InvalidQuote`] for a negative or non-finite base price.
pub fn build_quote(
    rules: &[DiscountRule],
    request: &QuoteRequest,
    default_locale: Locale,
) -> Result<Quote, BookingError> {
    let base_price = request.base_price;
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(BookingError::InvalidQuote {
            message: "basePrice must be a non-negative number".into(),
            context: None,
        });
    }

    let locale = request.locale.as_deref().and_then(Locale::from_code).unwrap_or(default_locale);
    let crm_rules = request.crm_discounts.as_ref().map(normalize_discounts_payload).unwrap_or_default();
    let discount = request
        .discount_code
        .as_deref()
        .and_then(|code| find_rule(&crm_rules, code).or_else(|| find_rule(rules, code)))
        .cloned();
    let total = discount.as_ref().map_or(base_price, |rule| rule.apply(base_price));

    Ok(Quote {
        locale,
        base_price,
        total,
        discount_amount: base_price - total,
        discount,
        formatted_base_price: format_currency_hkd(base_price),
        formatted_total: format_currency_hkd(total),
    })
}
