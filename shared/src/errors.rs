//! Error types for the HealthTrack calculation core

use thiserror::Error;

/// A numeric precondition of a calculation was violated
///
/// Raised before any computation happens, so a caller never observes a
/// partially computed result.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {field}: {message}")]
pub struct InvalidInputError {
    /// Name of the offending input, e.g. `weight_kg`
    pub field: &'static str,
    /// Human-readable description of the violated precondition
    pub message: String,
}

impl InvalidInputError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors surfaced by profile and activity stores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from flows that combine a store with a calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for the pure calculations
pub type CalcResult<T> = Result<T, InvalidInputError>;
