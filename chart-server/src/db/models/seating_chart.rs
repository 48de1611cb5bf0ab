//! Seating Chart Model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::RecordId;

/// Seating chart row
///
/// `wedding_id` is an opaque string: weddings live in another system and
/// are never joined here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingChart {
    pub id: Option<RecordId>,
    pub wedding_id: String,
    pub name: String,
    pub venue_name: Option<String>,
    pub layout_data: Option<Value>,
    pub is_active: bool,
}
