//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the outside world:
//! - Error types
//! - Logging setup

pub mod error;
pub mod logging;
