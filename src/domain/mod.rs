//! Domain types for the tip calculator: money value objects, the bill state
//! machine, render results and the formatting port.

pub mod bill;
pub mod display;
pub mod money;
pub mod ports;
