//! Currency formatting for terminal output
//!
//! Renders monetary values with the currency symbol, exactly two decimals,
//! and thousands grouping. BRL and EUR follow the continental convention
//! (`R$ 1.234,50`, `€1.234,50`); USD uses comma grouping (`$1,234.50`).

use crate::models::Currency;

/// Format a monetary value for display in the given currency
///
/// Non-finite values render as the symbol followed by `--`, so a corrupt
/// amount never panics a list view.
pub fn format_currency(value: f64, currency: Currency) -> String {
    if !value.is_finite() {
        return format!("{}--", currency.symbol());
    }

    let negative = value < 0.0;
    // Round to cents first so 1234.999 groups as 1.235,00 and not 1.234,100
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let (thousands_sep, decimal_sep) = match currency {
        Currency::Usd => (',', '.'),
        Currency::Brl | Currency::Eur => ('.', ','),
    };

    let grouped = group_thousands(whole, thousands_sep);
    let sign = if negative { "-" } else { "" };

    format!(
        "{}{}{}{}{:02}",
        sign,
        currency.symbol(),
        grouped,
        decimal_sep,
        fraction
    )
}

/// Insert a separator every three digits of the integer part
fn group_thousands(mut value: u64, separator: char) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push(separator);
            out.push_str(&format!("{:03}", group));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur_grouping() {
        assert_eq!(format_currency(1234.5, Currency::Eur), "€1.234,50");
        assert_eq!(format_currency(1_234_567.89, Currency::Eur), "€1.234.567,89");
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_currency(999.0, Currency::Usd), "$999.00");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_currency(5400.0, Currency::Brl), "R$5.400,00");
    }

    #[test]
    fn test_format_small_and_zero() {
        assert_eq!(format_currency(0.0, Currency::Eur), "€0,00");
        assert_eq!(format_currency(0.5, Currency::Usd), "$0.50");
        assert_eq!(format_currency(12.0, Currency::Eur), "€12,00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1234.5, Currency::Usd), "-$1,234.50");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        assert_eq!(format_currency(1234.999, Currency::Eur), "€1.235,00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::Eur), "€--");
        assert_eq!(format_currency(f64::INFINITY, Currency::Usd), "$--");
    }
}
