//! Inline script that sets `<html lang dir>` before first paint.

use serde_json::{Map, Value};
use sprouts_domain::Locale;
use strum::IntoEnumIterator;

/// Where the document attribute script is served.
pub const DOCUMENT_SCRIPT_PATH: &str = "/scripts/locale-document.js";

/// Builds the document attribute script for `default`.
///
/// The browser reads the first path segment, looks it up in the same locale table the
/// server uses and falls back to `default`.
pub fn build_document_attributes_script(default: Locale) -> String {
    let directions: Map<String, Value> = Locale::iter()
        .map(|locale| (locale.as_str().to_owned(), Value::from(locale.direction().as_str())))
        .collect();

    let default = Value::from(default.as_str());
    let directions = Value::Object(directions);

    format!(
        r"
(function applyLocaleDocumentAttributes() {{
  var defaultLocale = {default};
  var localeDirections = {directions};
  var segments = window.location.pathname.split('/').filter(Boolean);
  var candidateLocale = segments[0];
  var locale = Object.prototype.hasOwnProperty.call(localeDirections, candidateLocale)
    ? candidateLocale
    : defaultLocale;
  var direction = localeDirections[locale] || 'ltr';
  var rootElement = document.documentElement;
  rootElement.lang = locale;
  rootElement.setAttribute('dir', direction);
}})();
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_default_and_direction_table() {
        let script = build_document_attributes_script(Locale::ZhHk);

        assert!(script.contains(r#"var defaultLocale = "zh-HK";"#));
        assert!(script.contains(r#"{"en":"ltr","zh-CN":"ltr","zh-HK":"ltr"}"#));
        assert!(script.contains("rootElement.setAttribute('dir', direction);"));
    }
}
