//! Controllers layer - orchestration and coordination.
//!
//! This module contains the stateful pieces the app coordinates:
//! - The party order session
//! - The specialty catalog
//! - The order rows of the person on screen

pub mod catalog;
pub mod draft;
pub mod session;
