//! Unified error taxonomy for the seating system
//!
//! Every fallible engine operation returns [`SeatingError`]. The variants
//! split along the recovery paths the UI offers:
//! - [`SeatingError::CapacityExceeded`]: rejected by the engine's own
//!   check, nothing changed, shown inline next to the table.
//! - [`SeatingError::PersistenceFailure`]: storage/network failure after
//!   validation passed; any optimistic change has been rolled back and the
//!   user may simply retry the gesture.
//! - The remainder are caller mistakes (unknown ids, duplicate numbers,
//!   gesture misuse) that never touch the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for engine operations
pub type SeatingResult<T> = Result<T, SeatingError>;

/// Application error for the seating engine and its callers
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "details", rename_all = "snake_case")]
pub enum SeatingError {
    /// Assignment rejected: the table is already at capacity
    #[error("table {table_number} is full ({capacity} seats)")]
    CapacityExceeded { table_number: i64, capacity: i32 },

    /// Table creation rejected: the number is already used in this chart
    #[error("table number {table_number} already exists in this chart")]
    DuplicateTableNumber { table_number: i64 },

    /// A storage call failed; any optimistic change was reverted
    #[error("{operation} failed: {cause}")]
    PersistenceFailure { operation: String, cause: String },

    /// Referenced entity is not in the engine's loaded state
    #[error("{0} not found")]
    NotFound(String),

    /// Operation requires an active chart and none is selected
    #[error("no seating chart selected")]
    NoChartSelected,

    /// A drop arrived without a matching drag in progress
    #[error("no matching drag in progress")]
    NoActiveDrag,

    /// Input rejected before any side effect
    #[error("validation failed: {0}")]
    Validation(String),
}

impl SeatingError {
    /// Tag a persistence failure with the logical operation that issued it
    pub fn persistence(operation: impl Into<String>, cause: impl ToString) -> Self {
        Self::PersistenceFailure {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the user can recover by re-attempting the same gesture
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceFailure { .. })
    }
}
