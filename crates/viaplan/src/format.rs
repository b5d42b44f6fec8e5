//! Display formatting for the terminal report
//!
//! Amounts are whole pesos: the engine rounds every published figure to the
//! currency unit, so no cents are ever shown.

use jiff::civil::Date;

/// Format a whole-peso amount with thousands separators, e.g. `$22,500`.
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let pesos = abs_value.round() as i64;

    let pesos_str = pesos.to_string();
    let mut result = String::new();
    for (i, c) in pesos_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${formatted}")
    } else {
        format!("-${formatted}")
    }
}

/// Format a 0–100 percentage with one decimal, e.g. `10.0%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a civil date as ISO `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(22_500.0), "$22,500");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-450.0), "-$450");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(10.0), "10.0%");
        assert_eq!(format_percentage(16.666), "16.7%");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 2, 23)), "2026-02-23");
    }
}
