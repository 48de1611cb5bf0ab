//! Floor Table Model

use serde::{Deserialize, Serialize};
use shared::models::TableShape;
use surrealdb::RecordId;

/// Floor table row
///
/// `chart` is a record link to the owning seating chart. `table_number`
/// is the seat-assignment key and is kept unique within one chart by the
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTable {
    pub id: Option<RecordId>,
    pub chart: RecordId,
    pub table_number: i64,
    pub name: Option<String>,
    pub shape: TableShape,
    pub capacity: i32,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub notes: Option<String>,
}
