use rust_decimal::Decimal;

/// Locale-aware number formatting used to render the engine's values.
///
/// Returning `None` signals a formatting failure; callers substitute a fixed
/// fallback string instead of propagating an error.
pub trait NumberFormatter {
    /// Formats a fraction (`0.15`) in percent style (`"15%"`).
    fn percent(&self, rate: Decimal) -> Option<String>;
    /// Formats a monetary value in currency style (`"$7.50"`).
    fn currency(&self, amount: Decimal) -> Option<String>;
}

pub type FormatterBox = Box<dyn NumberFormatter>;
