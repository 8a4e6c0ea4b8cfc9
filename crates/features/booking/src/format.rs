//! Whole-unit Hong Kong dollar amounts, e.g. `HK$9,000`.

const HKD_PREFIX: &str = "HK$";

/// Rounds to the nearest dollar (halves away from zero) and groups thousands.
///
/// Non-finite input formats as zero.
pub fn format_currency_hkd(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{HKD_PREFIX}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_units() {
        assert_eq!(format_currency_hkd(0.0), "HK$0");
        assert_eq!(format_currency_hkd(999.0), "HK$999");
        assert_eq!(format_currency_hkd(9000.0), "HK$9,000");
        assert_eq!(format_currency_hkd(18000.0), "HK$18,000");
        assert_eq!(format_currency_hkd(1_234_567.0), "HK$1,234,567");
    }

    #[test]
    fn rounds_to_nearest_unit() {
        assert_eq!(format_currency_hkd(8999.6), "HK$9,000");
        assert_eq!(format_currency_hkd(1999.4), "HK$1,999");
        assert_eq!(format_currency_hkd(0.5), "HK$1");
    }

    #[test]
    fn negative_and_non_finite_values() {
        assert_eq!(format_currency_hkd(-1500.0), "-HK$1,500");
        assert_eq!(format_currency_hkd(-0.2), "HK$0");
        assert_eq!(format_currency_hkd(f64::NAN), "HK$0");
        assert_eq!(format_currency_hkd(f64::INFINITY), "HK$0");
    }
}
