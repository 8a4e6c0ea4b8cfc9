//! Discount rules from configuration or the CRM discounts feed, and price application.

use serde::Serialize;
use serde_json::{Map, Value};
use sprouts_domain::config::{DiscountKind, StaticDiscountRule};

pub const DISCOUNTS_API_PATH: &str = "/v1/discounts";

/// A usable discount rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DiscountRule {
    pub code: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "percent"))]
    pub kind: DiscountKind,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl DiscountRule {
    pub fn new(code: impl Into<String>, kind: DiscountKind, value: f64) -> Self {
        Self { code: code.into(), kind, value, name: None, currency_code: None, currency_symbol: None }
    }

    /// Price after this rule, never below zero. Percent results round to whole units.
    pub fn apply(&self, base_price: f64) -> f64 {
        match self.kind {
            DiscountKind::Percent => (base_price * (1.0 - self.value / 100.0)).round().max(0.0),
            DiscountKind::Amount => (base_price - self.value).max(0.0),
        }
    }
}

fn required_text(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn numeric_amount(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn optional_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn normalize_api_discount(value: &Value) -> Option<DiscountRule> {
    let record = value.as_object()?;
    let code = required_text(record.get("code"))?;
    let amount = numeric_amount(record.get("amount"))?;
    let is_percentage = record.get("is_percentage")?.as_bool()?;

    Some(DiscountRule {
        code,
        kind: if is_percentage { DiscountKind::Percent } else { DiscountKind::Amount },
        value: amount,
        name: required_text(record.get("name")),
        currency_code: optional_text(record, "currency_code"),
        currency_symbol: optional_text(record, "currency_symbol"),
    })
}

/// Drops configured rules with a blank code or a non-finite value and trims codes.
pub fn normalize_static_discount_rules(rules: &[StaticDiscountRule]) -> Vec<DiscountRule> {
    rules
        .iter()
        .filter(|rule| rule.value.is_finite())
        .filter_map(|rule| {
            let code = rule.code.trim();
            (!code.is_empty()).then(|| DiscountRule::new(code, rule.kind, rule.value))
        })
        .collect()
}

/// Reads a CRM discounts response: a bare array or `{ "data": [...] }`.
///
/// Entries need a `code`, a numeric `amount` (number or numeric string) and a boolean
/// `is_percentage`; anything else is skipped.
pub fn normalize_discounts_payload(payload: &Value) -> Vec<DiscountRule> {
    let entries = match payload {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(record) => record.get("data").and_then(Value::as_array).map_or(&[][..], Vec::as_slice),
        _ => &[],
    };

    entries.iter().filter_map(normalize_api_discount).collect()
}

/// `{base}{path}` for an `https` CRM base URL, or an empty string.
pub(crate) fn crm_endpoint_url(crm_api_base_url: &str, path: &str) -> String {
    let base = crm_api_base_url.trim();
    let is_https = base.get(..8).is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"));
    if !is_https {
        return String::new();
    }

    format!("{}{path}", base.trim_end_matches('/'))
}

pub fn build_discounts_api_url(crm_api_base_url: &str) -> String {
    crm_endpoint_url(crm_api_base_url, DISCOUNTS_API_PATH)
}

/// Case-insensitive lookup on the trimmed code.
pub fn find_rule<'a>(rules: &'a [DiscountRule], code: &str) -> Option<&'a DiscountRule> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    rules.iter().find(|rule| rule.code.to_uppercase() == code.to_uppercase())
}

pub fn apply_discount(base_price: f64, rule: Option<&DiscountRule>) -> f64 {
    rule.map_or(base_price, |rule| rule.apply(base_price))
}
