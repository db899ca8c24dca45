//! Application layer holding the calculation logic.
//!
//! This module defines the `TipCalculationEngine`, the single component that
//! owns the calculator's inputs and derives everything shown on screen. It is
//! synchronous and driven one event at a time by the interface layer.

pub mod engine;
