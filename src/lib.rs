//! Party order wizard for a pupuseria.
//!
//! Set how many people are ordering, take one order per person, and get a
//! combined list of what to prepare.

pub mod app;
pub mod ui;
