//! Interface layer: the screen controller standing in for the host UI, the
//! stepper widget model, and the event input / screen output adapters.

pub mod csv;
pub mod output;
pub mod screen;
pub mod stepper;
