//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest entity
///
/// Guests are owned by the guest-list feature; the seating engine reads
/// them and writes exactly one field, `table_number`. A `None` there
/// means the guest is unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Option<String>,
    pub wedding_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Guest {
    /// Whether the guest currently holds a seat at the given table number
    pub fn is_seated_at(&self, table_number: i64) -> bool {
        self.table_number == Some(table_number)
    }

    /// Whether the guest has no seat in any chart
    pub fn is_unassigned(&self) -> bool {
        self.table_number.is_none()
    }
}

/// Seat mutation payload, the only guest field the engine may write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSeatUpdate {
    pub table_number: Option<i64>,
}

/// Create guest payload (guest-list CRUD, consumed by the server only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub wedding_id: String,
    pub name: String,
    pub group_name: Option<String>,
    pub notes: Option<String>,
}
