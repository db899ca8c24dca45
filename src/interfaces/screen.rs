use crate::application::engine::TipCalculationEngine;
use crate::domain::display::DisplayStrings;
use crate::domain::money::TipRate;
use crate::error::{Alert, Result, TipError};
use crate::infrastructure::locale::{LocaleConventions, LocaleFormatter};
use crate::interfaces::csv::event_reader::{EventType, UiEvent};
use crate::interfaces::stepper::TipStepper;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Settings used when a screen is created.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub tip_rate: Decimal,
    pub step: Decimal,
    pub conventions: LocaleConventions,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            tip_rate: TipRate::DEFAULT.value(),
            step: TipStepper::DEFAULT_STEP,
            conventions: LocaleConventions::en_us(),
        }
    }
}

/// Text currently shown by each widget on the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScreenView {
    pub bill_field: String,
    pub tip_percent_label: String,
    pub tip_amount_label: String,
    pub total_label: String,
    /// Whether the bill field has keyboard focus.
    pub editing: bool,
}

impl ScreenView {
    fn apply(&mut self, display: DisplayStrings) {
        self.tip_percent_label = display.tip_label;
        self.tip_amount_label = display.tip_amount_text;
        self.total_label = display.total_text;
        if let Some(bill) = display.bill_amount_text {
            self.bill_field = bill;
        }
    }
}

/// Result of handling one event: the new widget state and any alert to present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenUpdate {
    pub event: Option<UiEvent>,
    pub view: ScreenView,
    pub alert: Option<Alert>,
}

/// The tip calculator screen: routes UI events into the engine and keeps the
/// widget texts in sync with what it renders.
pub struct TipScreen {
    engine: TipCalculationEngine,
    stepper: TipStepper,
    view: ScreenView,
}

impl TipScreen {
    pub fn new(config: ScreenConfig) -> Self {
        let stepper = TipStepper::new(config.tip_rate, config.step);
        let engine = TipCalculationEngine::with_tip_rate(
            Box::new(LocaleFormatter::new(config.conventions)),
            TipRate::new(stepper.value()),
        );
        let mut view = ScreenView::default();
        view.apply(engine.render());
        Self {
            engine,
            stepper,
            view,
        }
    }

    pub fn engine(&self) -> &TipCalculationEngine {
        &self.engine
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    /// Snapshot of the screen before any event has been handled.
    pub fn initial_update(&self) -> ScreenUpdate {
        ScreenUpdate {
            event: None,
            view: self.view.clone(),
            alert: None,
        }
    }

    /// Handles one event to completion.
    ///
    /// Validation failures are not errors here: they surface as an alert on the
    /// returned update. Only an unusable stepper value is an error.
    pub fn handle(&mut self, event: UiEvent) -> Result<ScreenUpdate> {
        debug!(event = ?event.event, value = ?event.value, "handling event");
        let mut alert = None;

        match event.event {
            EventType::Stepper => {
                let raw = event.value.as_deref().unwrap_or_default();
                let rate = Decimal::from_str(raw).map_err(|e| {
                    TipError::Event(format!("invalid stepper value {raw:?}: {e}"))
                })?;
                let rate = self.stepper.set_value(rate);
                self.rate_changed(rate);
            }
            EventType::Increment => {
                let rate = self.stepper.increment();
                self.rate_changed(rate);
            }
            EventType::Decrement => {
                let rate = self.stepper.decrement();
                self.rate_changed(rate);
            }
            EventType::Edit => {
                self.view.editing = true;
                let display = self.engine.begin_editing_reset();
                self.view.apply(display);
            }
            EventType::Submit => {
                let text = event.value.as_deref().unwrap_or_default();
                self.view.bill_field = text.to_string();
                match self.engine.set_bill_amount_from_text(text) {
                    Ok(display) => {
                        self.view.apply(display);
                        self.view.editing = false;
                    }
                    Err(e) => {
                        if e.clears_input() {
                            self.view.bill_field.clear();
                        }
                        alert = Some(e.alert());
                    }
                }
            }
            EventType::Clear => {
                let display = self.engine.clear_bill_amount();
                self.view.apply(display);
            }
        }

        Ok(ScreenUpdate {
            event: Some(event),
            view: self.view.clone(),
            alert,
        })
    }

    fn rate_changed(&mut self, rate: Decimal) {
        let display = self.engine.set_tip_rate(TipRate::new(rate));
        self.view.apply(display);
    }
}
