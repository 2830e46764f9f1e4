//! Rupiah formatting.
//!
//! Amounts are shown the way `id-ID` renders IDR: `Rp`, a non-breaking space,
//! whole units grouped with `.`. Fractions are rounded with the same
//! banker's rounding as the pricing module.

use rust_decimal::Decimal;

use crate::pricing::round_money;

/// Currency symbol plus the non-breaking space that follows it
pub const CURRENCY_PREFIX: &str = "Rp\u{a0}";

const GROUP_SEPARATOR: char = '.';

/// Format an amount as whole Rupiah, e.g. `Rp 1.250.000`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_money(amount, 0);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}{}", CURRENCY_PREFIX, grouped)
    } else {
        format!("{}{}", CURRENCY_PREFIX, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rp(s: &str) -> String {
        format!("{}{}", CURRENCY_PREFIX, s)
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), rp("0"));
        assert_eq!(format_currency(dec!(999)), rp("999"));
        assert_eq!(format_currency(dec!(1000)), rp("1.000"));
        assert_eq!(format_currency(dec!(5340000)), rp("5.340.000"));
        assert_eq!(format_currency(dec!(123456789)), rp("123.456.789"));
    }

    #[test]
    fn test_format_drops_fraction_with_bankers_rounding() {
        assert_eq!(format_currency(dec!(1000.4)), rp("1.000"));
        assert_eq!(format_currency(dec!(1000.6)), rp("1.001"));
        assert_eq!(format_currency(dec!(1000.5)), rp("1.000"));
        assert_eq!(format_currency(dec!(1001.5)), rp("1.002"));
        assert_eq!(format_currency(dec!(999.50)), rp("1.000"));
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(dec!(-1500)), format!("-{}", rp("1.500")));
        // Rounds to zero, so no sign
        assert_eq!(format_currency(dec!(-0.4)), rp("0"));
    }

    #[test]
    fn test_format_uses_non_breaking_space() {
        assert_eq!(format_currency(dec!(1)), "Rp\u{a0}1");
    }
}
