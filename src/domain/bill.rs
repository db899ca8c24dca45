use super::money::BillAmount;
use serde::Serialize;

/// Whether the screen currently holds a validated bill amount.
///
/// `NoBill` is the initial state. A successful parse moves to (or replaces)
/// `HasBill`; clearing returns to `NoBill`. Failed validation never transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "amount", rename_all = "snake_case")]
pub enum BillState {
    #[default]
    NoBill,
    HasBill(BillAmount),
}

impl BillState {
    pub fn amount(&self) -> Option<BillAmount> {
        match self {
            BillState::NoBill => None,
            BillState::HasBill(amount) => Some(*amount),
        }
    }

    pub fn has_bill(&self) -> bool {
        matches!(self, BillState::HasBill(_))
    }
}

impl From<Option<BillAmount>> for BillState {
    fn from(amount: Option<BillAmount>) -> Self {
        amount.map_or(BillState::NoBill, BillState::HasBill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_no_bill() {
        let state = BillState::default();
        assert_eq!(state, BillState::NoBill);
        assert!(!state.has_bill());
        assert!(state.amount().is_none());
    }

    #[test]
    fn test_has_bill_exposes_amount() {
        let state = BillState::from(Some(BillAmount::new(dec!(12.5))));
        assert!(state.has_bill());
        assert_eq!(state.amount().unwrap().value(), dec!(12.5));
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&BillState::NoBill).unwrap();
        assert_eq!(json, r#"{"state":"no_bill"}"#);
    }
}
