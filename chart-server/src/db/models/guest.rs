//! Guest Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Guest row
///
/// Held on behalf of the guest-list feature. The seating API mutates
/// `table_number` only; everything else is written through guest CRUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: Option<RecordId>,
    pub wedding_id: String,
    pub name: String,
    pub group_name: Option<String>,
    pub table_number: Option<i64>,
    pub notes: Option<String>,
}
