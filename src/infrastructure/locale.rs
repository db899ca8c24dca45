use crate::domain::ports::NumberFormatter;
use rust_decimal::{Decimal, RoundingStrategy};

/// Symbols and grouping rules for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConventions {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping_size: usize,
}

impl LocaleConventions {
    pub fn en_us() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_separator: '.',
            grouping_separator: ',',
            grouping_size: 3,
        }
    }
}

impl Default for LocaleConventions {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Percent and currency formatting in the style of a platform number formatter.
///
/// Percentages have no fraction digits, currency has two. Both round half to
/// even and group the integer part.
#[derive(Debug, Clone, Default)]
pub struct LocaleFormatter {
    conventions: LocaleConventions,
}

impl LocaleFormatter {
    pub fn new(conventions: LocaleConventions) -> Self {
        Self { conventions }
    }

    pub fn conventions(&self) -> &LocaleConventions {
        &self.conventions
    }

    /// Rounds to `scale` places and splits into sign, grouped integer digits
    /// and zero-padded fraction digits.
    fn split(&self, value: Decimal, scale: u32) -> (bool, String, String) {
        let mut rounded =
            value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(scale);

        let digits = rounded.to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        // rescale leaves the scale short when the extra digits would overflow the mantissa
        let frac_part = format!("{frac_part:0<width$}", width = scale as usize);
        (negative, self.group(int_part), frac_part)
    }

    fn group(&self, int_part: &str) -> String {
        let size = self.conventions.grouping_size;
        if size == 0 || int_part.len() <= size {
            return int_part.to_string();
        }
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / size);
        let lead = int_part.len() % size;
        for (i, ch) in int_part.chars().enumerate() {
            if i != 0 && (i + size - lead) % size == 0 {
                grouped.push(self.conventions.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl NumberFormatter for LocaleFormatter {
    fn percent(&self, rate: Decimal) -> Option<String> {
        let scaled = rate.checked_mul(Decimal::ONE_HUNDRED)?;
        let (negative, int_part, _) = self.split(scaled, 0);
        let sign = if negative { "-" } else { "" };
        Some(format!("{sign}{int_part}%"))
    }

    fn currency(&self, amount: Decimal) -> Option<String> {
        let (negative, int_part, frac_part) = self.split(amount, 2);
        let sign = if negative { "-" } else { "" };
        Some(format!(
            "{sign}{}{int_part}{}{frac_part}",
            self.conventions.currency_symbol, self.conventions.decimal_separator
        ))
    }
}
