//! Floor Table Model

use serde::{Deserialize, Serialize};

/// Table shape; affects rendering and default sizing, not capacity logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    Round,
    Rectangular,
    Square,
}

impl TableShape {
    /// Default canvas footprint (width, height) when a new table is placed
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            TableShape::Round => (120.0, 120.0),
            TableShape::Rectangular => (180.0, 90.0),
            TableShape::Square => (110.0, 110.0),
        }
    }
}

/// Floor table entity
///
/// `table_number` is the assignment join key (guests reference it, not the
/// record id). It is unique within one chart but may repeat across charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorTable {
    pub id: Option<String>,
    pub chart_id: String,
    pub table_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub shape: TableShape,
    pub capacity: i32,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FloorTable {
    pub fn position(&self) -> TablePosition {
        TablePosition {
            x: self.x,
            y: self.y,
        }
    }
}

/// Create table payload
///
/// `table_number: None` asks the engine to pick the next free number
/// (max existing + 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTableCreate {
    pub chart_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub shape: TableShape,
    pub capacity: i32,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Canvas position payload, the sole mutation a table drag produces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TablePosition {
    pub x: f64,
    pub y: f64,
}
