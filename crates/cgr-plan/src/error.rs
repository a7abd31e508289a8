//! Contact-plan error type.

use thiserror::Error;

use cgr_core::ContactId;

/// Errors produced while building or loading a contact plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("contact plan parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid {id}: {reason}")]
    InvalidContact { id: ContactId, reason: String },

    #[error("{0} declared more than once")]
    DuplicateContact(ContactId),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
