//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (LineItem, Summary, Settings, Messages)
//! - `controllers/` - Stateful pieces (OrderSession, Catalog, PersonDraft)
//! - `services/` - Pure business operations (aggregation, quantities)
//! - `infrastructure/` - Error type and logging setup
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::catalog::Catalog;
pub use controllers::draft::{DraftRow, PersonDraft};
pub use controllers::session::{OrderSession, SessionPhase, SubmitOutcome};
pub use domain::{
    AppSettings, LineItem, Message, PersonContext, PersonOrder, Summary, SummaryEntry, ThemeMode,
    Variant,
};
pub use infrastructure::error::{AppError, Result};
pub use state::{AppState, Flow, View};
