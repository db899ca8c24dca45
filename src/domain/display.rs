use serde::Serialize;

/// Shown when the tip rate cannot be formatted.
pub const TIP_LABEL_FALLBACK: &str = "0% Tip";
/// Shown when a currency value cannot be formatted.
pub const CURRENCY_FALLBACK: &str = "$0.00";
pub const TIP_LABEL_SUFFIX: &str = "Tip";

/// Formatted strings the UI layer assigns to its widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayStrings {
    pub tip_label: String,
    /// Empty when no bill is present.
    pub tip_amount_text: String,
    /// Empty when no bill is present.
    pub total_text: String,
    /// Normalized currency form of the bill. `None` leaves the raw input alone.
    pub bill_amount_text: Option<String>,
}

impl DisplayStrings {
    pub fn tip_label(percent: Option<String>) -> String {
        match percent {
            Some(percent) => format!("{percent} {TIP_LABEL_SUFFIX}"),
            None => TIP_LABEL_FALLBACK.to_string(),
        }
    }

    pub fn currency_or_fallback(formatted: Option<String>) -> String {
        formatted.unwrap_or_else(|| CURRENCY_FALLBACK.to_string())
    }
}
