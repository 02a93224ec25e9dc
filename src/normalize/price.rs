//! Currency string parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Number of fractional digits in every parsed price.
const PRICE_SCALE: u32 = 2;

/// Parses a storefront price string into a fixed-point decimal with two
/// fractional digits.
///
/// Everything except ASCII digits and `-` is discarded, and the last two digits
/// are taken as cents (`"$19.99"` and `"19,99€"` both give `19.99`). Prices are
/// never negative: leading minus signs count as `0` digits, and a minus after
/// the amount (the `-50%` of a strikethrough badge) ends it. Any malformed or
/// empty input gives `0.00`.
///
/// A badge with no amount before it is read as digits: `"Free -100%"` gives
/// `1.00` (`"0100"`, last two digits as cents).
pub fn parse_price(raw: &str) -> Decimal {
    let digits = price_digits(raw);
    if digits.is_empty() {
        return zero();
    }

    let split = digits.len().saturating_sub(PRICE_SCALE as usize);
    let (whole, cents) = digits.split_at(split);
    let whole = if whole.is_empty() { "0" } else { whole };

    match Decimal::from_str(&format!("{whole}.{cents:0>2}")) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Unparsable price '{}': {}", raw, e);
            zero()
        }
    }
}

/// Reduces `raw` to the digit string of the amount.
fn price_digits(raw: &str) -> String {
    let mut digits = String::new();
    let mut seen_digit = false;
    for c in raw.chars().filter(|c| c.is_ascii_digit() || *c == '-') {
        match c {
            '-' if seen_digit => break,
            '-' => digits.push('0'),
            _ => {
                seen_digit = true;
                digits.push(c);
            }
        }
    }
    digits
}

fn zero() -> Decimal {
    Decimal::new(0, PRICE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_parse_price_dollars() {
        assert_eq!(parse_price("$19.99"), dec(1999));
        assert_eq!(parse_price("  $59.99 USD "), dec(5999));
    }

    #[test]
    fn test_parse_price_european_format() {
        assert_eq!(parse_price("19,99€"), dec(1999));
        assert_eq!(parse_price("1.299,00 pуб."), dec(129900));
    }

    #[test]
    fn test_parse_price_free_and_empty() {
        assert_eq!(parse_price("Free"), dec(0));
        assert_eq!(parse_price("Free to Play"), dec(0));
        assert_eq!(parse_price(""), dec(0));
        assert_eq!(parse_price("").scale(), 2);
    }

    #[test]
    fn test_parse_price_strikethrough_suffix_is_ignored() {
        let price = parse_price("$9.99 -50%");
        assert_eq!(price, dec(999));
        assert!(price >= Decimal::ZERO);
        assert_eq!(parse_price("$0.00 -100%"), dec(0));
    }

    #[test]
    fn test_parse_price_leading_minus_is_not_negation() {
        assert_eq!(parse_price("-$4.99"), dec(499));
        assert_eq!(parse_price("−$4.99"), dec(499));
        assert!(parse_price("--").is_zero());
        assert!(!parse_price("-1").is_sign_negative());
    }

    #[test]
    fn test_parse_price_badge_without_amount_is_read_as_digits() {
        assert_eq!(parse_price("Free -100%"), dec(100));
        assert_eq!(parse_price("-50%"), dec(50));
    }

    #[test]
    fn test_parse_price_short_amounts() {
        assert_eq!(parse_price("5"), dec(5));
        assert_eq!(parse_price("50"), dec(50));
        assert_eq!(parse_price("$0.99"), dec(99));
    }

    #[test]
    fn test_parse_price_overflow_defaults_to_zero() {
        let huge = "9".repeat(64);
        assert_eq!(parse_price(&huge), dec(0));
    }

    #[test]
    fn test_parse_price_keeps_two_fraction_digits() {
        assert_eq!(parse_price("$20.00").to_string(), "20.00");
        assert_eq!(parse_price("$0.05").to_string(), "0.05");
    }
}
