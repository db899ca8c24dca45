use crate::domain::bill::BillState;
use crate::domain::display::DisplayStrings;
use crate::domain::money::{BillAmount, DerivedAmounts, TipRate};
use crate::domain::ports::FormatterBox;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use tracing::debug;

/// Holds the bill amount and tip rate and renders the derived display.
///
/// Every setter recomputes and returns the display strings as part of its
/// contract. Derived amounts are never stored; `render` always recomputes them
/// from the current inputs.
pub struct TipCalculationEngine {
    tip_rate: TipRate,
    bill: BillState,
    formatter: FormatterBox,
}

impl TipCalculationEngine {
    /// Creates an engine with no bill and the default 15% rate.
    pub fn new(formatter: FormatterBox) -> Self {
        Self::with_tip_rate(formatter, TipRate::DEFAULT)
    }

    pub fn with_tip_rate(formatter: FormatterBox, tip_rate: TipRate) -> Self {
        Self {
            tip_rate,
            bill: BillState::NoBill,
            formatter,
        }
    }

    pub fn tip_rate(&self) -> TipRate {
        self.tip_rate
    }

    pub fn bill_amount(&self) -> Option<BillAmount> {
        self.bill.amount()
    }

    pub fn state(&self) -> BillState {
        self.bill
    }

    /// Tip and total for the current inputs, `None` without a bill or on overflow.
    pub fn derived(&self) -> Option<DerivedAmounts> {
        self.bill.amount()?.derive(self.tip_rate)
    }

    /// Replaces the tip rate. The value is taken as-is; no clamping.
    pub fn set_tip_rate(&mut self, tip_rate: TipRate) -> DisplayStrings {
        debug!(rate = %tip_rate.value(), "tip rate changed");
        self.tip_rate = tip_rate;
        self.render()
    }

    /// Validates `text` and, on success, replaces the bill amount.
    ///
    /// On failure the stored bill is left exactly as it was.
    pub fn set_bill_amount_from_text(
        &mut self,
        text: &str,
    ) -> Result<DisplayStrings, ValidationError> {
        match BillAmount::parse(text) {
            Ok(amount) => {
                debug!(amount = %amount.value(), "bill amount accepted");
                self.bill = BillState::HasBill(amount);
                Ok(self.render())
            }
            Err(e) => {
                debug!(error = %e, "bill amount rejected");
                Err(e)
            }
        }
    }

    pub fn clear_bill_amount(&mut self) -> DisplayStrings {
        debug!("bill amount cleared");
        self.bill = BillState::NoBill;
        self.render()
    }

    /// Transient display while the user types a replacement amount.
    ///
    /// Tip and total read as zero currency; the bill text is `None` so the raw
    /// field is left alone. Nothing is mutated.
    pub fn begin_editing_reset(&self) -> DisplayStrings {
        let zero = self.currency(Some(Decimal::ZERO));
        DisplayStrings {
            tip_label: self.tip_label(),
            tip_amount_text: zero.clone(),
            total_text: zero,
            bill_amount_text: None,
        }
    }

    pub fn render(&self) -> DisplayStrings {
        let tip_label = self.tip_label();
        match self.bill {
            BillState::NoBill => DisplayStrings {
                tip_label,
                tip_amount_text: String::new(),
                total_text: String::new(),
                bill_amount_text: None,
            },
            BillState::HasBill(amount) => {
                let derived = amount.derive(self.tip_rate);
                DisplayStrings {
                    tip_label,
                    tip_amount_text: self.currency(derived.map(|d| d.tip_amount)),
                    total_text: self.currency(derived.map(|d| d.total)),
                    bill_amount_text: Some(self.currency(Some(amount.value()))),
                }
            }
        }
    }

    fn tip_label(&self) -> String {
        DisplayStrings::tip_label(self.formatter.percent(self.tip_rate.value()))
    }

    fn currency(&self, amount: Option<Decimal>) -> String {
        DisplayStrings::currency_or_fallback(amount.and_then(|a| self.formatter.currency(a)))
    }
}
