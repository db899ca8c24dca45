use crate::error::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

/// Positive exponents beyond this overflow `Decimal` for any non-zero mantissa.
/// Negative exponents beyond it underflow to zero.
const MAX_EXPONENT: u32 = 64;

/// A bill amount in major currency units (dollars with cents).
///
/// Only constructed from text that passed validation. Zero and negative values
/// are allowed; there is no upper bound beyond what `Decimal` can represent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct BillAmount(Decimal);

impl BillAmount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Validates raw user text into a bill amount.
    ///
    /// Empty or whitespace-only text is `EmptyInput`. Anything else must be a
    /// plain decimal literal (sign, digits, one optional point, optional
    /// exponent) after trimming, otherwise it is `InvalidNumber`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        parse_decimal_literal(trimmed)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidNumber {
                input: text.to_string(),
            })
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Tip and total at the given rate, or `None` if either overflows.
    pub fn derive(&self, rate: TipRate) -> Option<DerivedAmounts> {
        let tip_amount = self.0.checked_mul(rate.value())?;
        let total = self.0.checked_add(tip_amount)?;
        Some(DerivedAmounts { tip_amount, total })
    }
}

/// Fraction of the bill added as gratuity, shown as a percentage.
///
/// Any decimal is accepted here. Range enforcement belongs to whatever
/// widget produces the value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct TipRate(Decimal);

impl TipRate {
    pub const DEFAULT: Self = Self(dec!(0.15));

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for TipRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values derived from a bill and a rate. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedAmounts {
    pub tip_amount: Decimal,
    pub total: Decimal,
}

fn parse_decimal_literal(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !is_digits(int_digits) || !is_digits(frac_digits) {
        return None;
    }

    let exponent = match exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    let canonical = format!(
        "{}.{}",
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits }
    );
    let mut value = Decimal::from_str(&canonical).ok()?;

    if !value.is_zero() && exponent != 0 {
        if exponent.unsigned_abs() > MAX_EXPONENT {
            return if exponent > 0 { None } else { Some(Decimal::ZERO) };
        }
        for _ in 0..exponent.unsigned_abs() {
            value = if exponent > 0 {
                value.checked_mul(Decimal::TEN)?
            } else {
                value.checked_div(Decimal::TEN)?
            };
        }
    }

    Some(if negative { -value } else { value })
}

fn parse_exponent(exp: &str) -> Option<i32> {
    let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    exp.parse().ok()
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(BillAmount::parse("50").unwrap().value(), dec!(50));
        assert_eq!(BillAmount::parse("12.34").unwrap().value(), dec!(12.34));
        assert_eq!(BillAmount::parse(".5").unwrap().value(), dec!(0.5));
        assert_eq!(BillAmount::parse("7.").unwrap().value(), dec!(7));
        assert_eq!(BillAmount::parse("+3").unwrap().value(), dec!(3));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(BillAmount::parse("  42.10\n").unwrap().value(), dec!(42.10));
    }

    #[test]
    fn test_parse_accepts_zero_and_negative() {
        assert_eq!(BillAmount::parse("0").unwrap().value(), Decimal::ZERO);
        assert_eq!(BillAmount::parse("-20.5").unwrap().value(), dec!(-20.5));
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(BillAmount::parse("1e3").unwrap().value(), dec!(1000));
        assert_eq!(BillAmount::parse("2.5E+1").unwrap().value(), dec!(25));
        assert_eq!(BillAmount::parse("125e-2").unwrap().value(), dec!(1.25));
        assert_eq!(BillAmount::parse("0e999999").unwrap().value(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_empty_is_empty_input() {
        assert_eq!(BillAmount::parse(""), Err(ValidationError::EmptyInput));
        assert_eq!(BillAmount::parse("   \t"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for text in [
            "abc", "$50.00", "1,000", "1.2.3", ".", "-", "+", "1e", "e5", "inf", "nan", "0x10",
            "1_000", "12 34", "1e1e1",
        ] {
            assert!(
                matches!(
                    BillAmount::parse(text),
                    Err(ValidationError::InvalidNumber { .. })
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_tiny_values_round_to_zero() {
        for text in [
            "1e-64",
            "1e-65",
            "1e-999",
            "-1e-999",
            "0.00000000000000000000000000000000000000001",
        ] {
            assert_eq!(
                BillAmount::parse(text).unwrap().value(),
                Decimal::ZERO,
                "{text:?} should parse as zero"
            );
        }
    }

    #[test]
    fn test_parse_rejects_unrepresentable_values() {
        assert!(matches!(
            BillAmount::parse("1e40"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            BillAmount::parse("1e9999"),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_invalid_number_keeps_raw_input() {
        assert_eq!(
            BillAmount::parse(" abc "),
            Err(ValidationError::InvalidNumber {
                input: " abc ".to_string()
            })
        );
    }

    #[test]
    fn test_derive_tip_and_total() {
        let bill = BillAmount::new(dec!(100.00));
        let derived = bill.derive(TipRate::DEFAULT).unwrap();
        assert_eq!(derived.tip_amount, dec!(15.00));
        assert_eq!(derived.total, dec!(115.00));
    }

    #[test]
    fn test_derive_overflow_is_none() {
        let bill = BillAmount::new(Decimal::MAX);
        assert!(bill.derive(TipRate::new(dec!(2))).is_none());
        assert!(bill.derive(TipRate::new(dec!(0.5))).is_none());
    }

    #[test]
    fn test_tip_rate_default() {
        assert_eq!(TipRate::default().value(), dec!(0.15));
    }
}
