//! Services layer - business operations and utilities.
//!
//! This module contains pure business logic:
//! - Order aggregation into a sorted summary
//! - Quantity and party size helpers

pub mod aggregate;
pub mod quantity;
