use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Model of the stepper widget that drives the tip rate.
///
/// The stepper is where the rate range is enforced: every value it reports lies
/// within `[minimum, maximum]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TipStepper {
    value: Decimal,
    minimum: Decimal,
    maximum: Decimal,
    step: Decimal,
}

impl TipStepper {
    pub const DEFAULT_STEP: Decimal = dec!(0.05);

    pub fn new(initial: Decimal, step: Decimal) -> Self {
        let mut stepper = Self {
            value: Decimal::ZERO,
            minimum: Decimal::ZERO,
            maximum: Decimal::ONE,
            step,
        };
        stepper.set_value(initial);
        stepper
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn set_value(&mut self, value: Decimal) -> Decimal {
        self.value = value.clamp(self.minimum, self.maximum);
        self.value
    }

    pub fn increment(&mut self) -> Decimal {
        self.set_value(self.value.saturating_add(self.step))
    }

    pub fn decrement(&mut self) -> Decimal {
        self.set_value(self.value.saturating_sub(self.step))
    }
}

impl Default for TipStepper {
    fn default() -> Self {
        Self::new(dec!(0.15), Self::DEFAULT_STEP)
    }
}
