use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A person's order is empty or one of its line items is incomplete.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Order incomplete: {submitted} of {expected} people have ordered")]
    SessionIncomplete { submitted: usize, expected: usize },

    #[error("Party size out of range: {0} (must be between 1 and 50)")]
    OutOfRange(i64),

    #[error("No order is being collected")]
    NotCollecting,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
