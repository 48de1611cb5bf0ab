//! Persistence boundary
//!
//! The engine specifies *what* must be persisted and *when*; transports
//! implement this trait. [`http::HttpGateway`] speaks to a chart-server
//! instance, [`memory::MemoryGateway`] keeps everything in-process and is
//! the test double for every rollback property.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use shared::models::{
    FloorTable, FloorTableCreate, Guest, SeatingChart, SeatingChartCreate, TablePosition,
};
use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write conflicts with existing data (duplicate table number)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage refused or is unreachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Storage interface consumed by the engine
///
/// One method per persisted mutation or read the engine performs. Guest
/// records are owned elsewhere; `update_guest_seat` is deliberately the
/// only guest write this boundary exposes.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    // ---- charts ----
    async fn list_charts(&self, wedding_id: &str) -> GatewayResult<Vec<SeatingChart>>;
    async fn create_chart(&self, data: SeatingChartCreate) -> GatewayResult<SeatingChart>;
    /// Deletes the chart and its tables. Guest seats are released by the
    /// engine beforehand, never by this call.
    async fn delete_chart(&self, chart_id: &str) -> GatewayResult<()>;

    // ---- tables ----
    async fn list_tables(&self, chart_id: &str) -> GatewayResult<Vec<FloorTable>>;
    async fn create_table(&self, data: FloorTableCreate) -> GatewayResult<FloorTable>;
    async fn update_table_position(
        &self,
        table_id: &str,
        pos: TablePosition,
    ) -> GatewayResult<FloorTable>;
    async fn delete_table(&self, table_id: &str) -> GatewayResult<()>;

    // ---- guests ----
    async fn list_guests(&self, wedding_id: &str) -> GatewayResult<Vec<Guest>>;
    async fn update_guest_seat(
        &self,
        guest_id: &str,
        table_number: Option<i64>,
    ) -> GatewayResult<Guest>;
}
