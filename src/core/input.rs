//! Net price text validation.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::PricingError;

/// Smallest positive amount `Decimal` can hold.
///
/// Positive input below it is priced as this amount; every output then
/// rounds to `0.00`.
pub const SMALLEST_NET_PRICE: Decimal = dec!(0.0000000000000000000000000001);

/// Largest power of ten `Decimal` can represent (28 significant digits).
const MAX_MAGNITUDE: i64 = 28;

/// Exponents beyond this are saturated before any arithmetic.
const EXPONENT_LIMIT: i64 = 1_000_000;

/// Parse the raw text of the net-price field into a positive decimal.
///
/// Accepts what a numeric form field accepts: an optional sign, digits and
/// a single decimal point, optionally with an exponent (`"1.5e2"`). A comma
/// is accepted as the decimal separator when no point is present, since
/// that is how net prices are typed on Polish keyboards. Surrounding
/// whitespace is ignored.
///
/// Positive amounts too small for `Decimal` are raised to
/// [`SMALLEST_NET_PRICE`]; amounts too large for it are
/// [`PricingError::Overflow`].
///
/// ```
/// use allegro_pricing::core::{PricingError, parse_net_price};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_net_price("49,99"), Ok(dec!(49.99)));
/// assert_eq!(parse_net_price(" 1e2 "), Ok(dec!(100)));
/// assert_eq!(parse_net_price(""), Err(PricingError::Empty));
/// assert!(matches!(parse_net_price("0"), Err(PricingError::NonPositive(_))));
/// assert!(matches!(parse_net_price("1e29"), Err(PricingError::Overflow(_))));
/// ```
pub fn parse_net_price(text: &str) -> Result<Decimal, PricingError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PricingError::Empty);
    }

    let normalized = normalize_separator(text);
    let literal =
        Literal::split(&normalized).ok_or_else(|| PricingError::NotANumber(text.to_string()))?;

    let Some(magnitude) = literal.magnitude() else {
        return Err(PricingError::NonPositive(Decimal::ZERO));
    };

    let value = literal.absolute_value(magnitude);
    match (literal.negative, value) {
        (false, Some(value)) => Ok(value),
        (false, None) => Err(PricingError::Overflow(text.to_string())),
        (true, value) => Err(PricingError::NonPositive(-value.unwrap_or(Decimal::MAX))),
    }
}

fn normalize_separator(text: &str) -> Cow<'_, str> {
    if text.contains(',') && !text.contains('.') {
        Cow::Owned(text.replacen(',', ".", 1))
    } else {
        Cow::Borrowed(text)
    }
}

/// A syntactically valid number, split into its parts.
#[derive(Debug)]
struct Literal<'a> {
    negative: bool,
    /// Mantissa without sign, e.g. `"12.50"`.
    mantissa: &'a str,
    integer_digits: &'a str,
    fraction_digits: &'a str,
    exponent: Option<i64>,
}

impl<'a> Literal<'a> {
    fn split(text: &'a str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(parse_exponent(exponent)?)),
            None => (unsigned, None),
        };

        let (integer_digits, fraction_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer_digits)
            || !all_digits(fraction_digits)
            || integer_digits.len() + fraction_digits.len() == 0
        {
            return None;
        }

        Some(Self {
            negative,
            mantissa,
            integer_digits,
            fraction_digits,
            exponent,
        })
    }

    /// Power of ten of the leading significant digit, or `None` for zero.
    fn magnitude(&self) -> Option<i64> {
        let mut digits = self.integer_digits.bytes().chain(self.fraction_digits.bytes());
        let first_nonzero = digits.position(|b| b != b'0')? as i64;
        Some(self.integer_digits.len() as i64 - 1 - first_nonzero + self.exponent.unwrap_or(0))
    }

    /// Absolute value, or `None` if it exceeds `Decimal::MAX`.
    fn absolute_value(&self, magnitude: i64) -> Option<Decimal> {
        if magnitude > MAX_MAGNITUDE {
            return None;
        }
        if magnitude < -MAX_MAGNITUDE {
            return Some(SMALLEST_NET_PRICE);
        }

        let value = match self.exponent {
            None => Decimal::from_str(self.mantissa).ok()?,
            // Restate as d.ddd × 10^magnitude so the exponent stays within
            // what `from_scientific` accepts.
            Some(_) => Decimal::from_scientific_lossy(&self.normalized(magnitude)).ok()?,
        };

        if value.is_zero() {
            Some(SMALLEST_NET_PRICE)
        } else {
            Some(value)
        }
    }

    fn normalized(&self, magnitude: i64) -> String {
        let digits: String = self
            .integer_digits
            .chars()
            .chain(self.fraction_digits.chars())
            .skip_while(|c| *c == '0')
            .collect();
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{magnitude}")
        } else {
            format!("{lead}.{rest}e{magnitude}")
        }
    }
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX).min(EXPONENT_LIMIT);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(parse_net_price("100"), Ok(dec!(100)));
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_net_price("49.99"), Ok(dec!(49.99)));
        assert_eq!(parse_net_price("0.01"), Ok(dec!(0.01)));
    }

    #[test]
    fn trailing_zeros_kept() {
        assert_eq!(parse_net_price("12.50").unwrap().to_string(), "12.50");
    }

    #[test]
    fn comma_separator() {
        assert_eq!(parse_net_price("12,50"), Ok(dec!(12.50)));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_net_price("  7.5\t"), Ok(dec!(7.5)));
    }

    #[test]
    fn explicit_plus_sign() {
        assert_eq!(parse_net_price("+3"), Ok(dec!(3)));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(parse_net_price("1e2"), Ok(dec!(100)));
        assert_eq!(parse_net_price("2.5E1"), Ok(dec!(25)));
        assert_eq!(parse_net_price("5e-1"), Ok(dec!(0.5)));
        assert_eq!(parse_net_price("1e+2"), Ok(dec!(100)));
    }

    #[test]
    fn exponent_folded_into_fraction() {
        // Exponent alone is out of range, the value is not.
        assert_eq!(
            parse_net_price("0.0001e30"),
            Ok(dec!(100000000000000000000000000))
        );
        let tiny = parse_net_price("123456e-30").unwrap();
        assert!(tiny > SMALLEST_NET_PRICE);
        assert!(tiny < dec!(0.000000000000000000000001));
    }

    #[test]
    fn tiny_positive_raised_to_smallest() {
        for text in [
            "1e-29",
            "1e-30",
            "0.5e-28",
            "0.00000000000000000000000000001",
            "1e-999999999999",
        ] {
            assert_eq!(parse_net_price(text), Ok(SMALLEST_NET_PRICE), "{text:?}");
        }
    }

    #[test]
    fn smallest_representable_kept() {
        assert_eq!(parse_net_price("1e-28"), Ok(SMALLEST_NET_PRICE));
        assert_eq!(parse_net_price("3e-28"), Ok(dec!(0.0000000000000000000000000003)));
    }

    #[test]
    fn too_large_is_overflow() {
        for text in [
            "1e29",
            "0.1e30",
            "79228162514264337593543950336",
            "100000000000000000000000000000",
            "1e999999999999",
        ] {
            assert_eq!(
                parse_net_price(text),
                Err(PricingError::Overflow(text.into())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn largest_representable_parses() {
        assert_eq!(parse_net_price("79228162514264337593543950335"), Ok(Decimal::MAX));
        assert_eq!(parse_net_price("7e28"), Ok(dec!(70000000000000000000000000000)));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_net_price(""), Err(PricingError::Empty));
        assert_eq!(parse_net_price("   "), Err(PricingError::Empty));
    }

    #[test]
    fn garbage_rejected() {
        for text in [
            "abc", "12abc", "1.2.3", "1_000", "NaN", "Infinity", "-", ".", "e5", "1,234.5", "1e",
            "1e+", "+-5", "--5", "1e2.5",
        ] {
            assert!(
                matches!(parse_net_price(text), Err(PricingError::NotANumber(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn zero_rejected() {
        for text in ["0", "0.00", "-0", "0e5", "000.000"] {
            assert_eq!(
                parse_net_price(text),
                Err(PricingError::NonPositive(Decimal::ZERO)),
                "{text:?}"
            );
        }
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(parse_net_price("-5"), Err(PricingError::NonPositive(dec!(-5))));
        assert_eq!(parse_net_price("-1e-40"), Err(PricingError::NonPositive(-SMALLEST_NET_PRICE)));
        assert_eq!(parse_net_price("-1e40"), Err(PricingError::NonPositive(Decimal::MIN)));
    }

    #[test]
    fn error_keeps_trimmed_text() {
        assert_eq!(
            parse_net_price(" zł "),
            Err(PricingError::NotANumber("zł".into()))
        );
    }
}
