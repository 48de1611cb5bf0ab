//! Shared types for the seating chart system
//!
//! Common types used across the engine and the chart server: domain
//! models, mutation payloads, and the error taxonomy.

pub mod error;
pub mod models;

// Re-exports
pub use error::{SeatingError, SeatingResult};
pub use serde::{Deserialize, Serialize};
