//! Seating Chart Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seating chart entity
///
/// A wedding may keep several charts (alternate layouts); exactly one is
/// focused in the UI at a time, but that selection is client state and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingChart {
    pub id: Option<String>,
    pub wedding_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    /// Freeform canvas metadata (zoom, background, grid), opaque here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_data: Option<Value>,
    pub is_active: bool,
}

/// Create chart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingChartCreate {
    pub wedding_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
}
