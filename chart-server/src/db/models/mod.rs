//! Database row models
//!
//! Internal records with native `RecordId` identifiers and record links.
//! API responses use the string-id models from `shared::models`; see
//! [`crate::api::convert`] for the mapping.

pub mod floor_table;
pub mod guest;
pub mod seating_chart;

pub use floor_table::FloorTable;
pub use guest::Guest;
pub use seating_chart::SeatingChart;
