//! Emission Engine
//!
//! Scope 1 + 2 carbon estimation for small and medium enterprises, with an
//! optional minor Scope 3 add-on for water and waste.

pub mod calculator;
pub mod coerce;
pub mod error;
pub mod factors;
pub mod models;
pub mod report;

pub use calculator::estimate;
pub use models::{EstimationInput, EstimationResult, Mode, Shares};
