//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Line items, person orders and doughs
//! - The aggregated summary
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod order;
pub mod settings;
pub mod summary;

pub use messages::Message;
pub use order::{LineItem, PersonContext, PersonOrder, Variant};
pub use settings::{AppSettings, ThemeMode};
pub use summary::{Summary, SummaryEntry};
