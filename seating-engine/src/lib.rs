//! Seating Engine - seat assignment and floor layout for wedding charts
//!
//! # Architecture overview
//!
//! The engine is the client-side core of the seating chart feature. It owns
//! the four state slices (`charts`, `selected_chart`, `tables`, `guests`),
//! derives everything else (occupancy, rosters, the unassigned list) from
//! them, and mediates every mutating gesture against the persistence
//! boundary.
//!
//! # Module structure
//!
//! ```text
//! seating-engine/src/
//! ├── engine.rs      # SeatingEngine façade owning state + gateway
//! ├── state.rs       # ChartState slices and DragState
//! ├── selector.rs    # Chart selection and chart CRUD
//! ├── registry.rs    # Table CRUD and geometry
//! ├── assignment.rs  # Capacity-checked guest/table binding
//! ├── directory.rs   # Assigned/unassigned guest views
//! ├── layout.rs      # Drag state machine, optimistic moves + rollback
//! └── gateway/       # Persistence boundary (trait, http, memory)
//! ```
//!
//! All mutating operations are `async` and suspend on the gateway call; the
//! engine itself is `&mut self` single-owner, the Rust rendition of a
//! single-threaded UI event loop. Same-entity races between overlapping
//! gestures are resolved by last-write-wins at the storage layer.

pub mod assignment;
pub mod directory;
pub mod engine;
pub mod gateway;
pub mod layout;
pub mod registry;
pub mod selector;
pub mod state;

// Re-export public types
pub use assignment::{Occupancy, occupancy};
pub use engine::SeatingEngine;
pub use gateway::{GatewayError, GatewayResult, PersistenceGateway};
pub use gateway::http::HttpGateway;
pub use gateway::memory::MemoryGateway;
pub use layout::MoveOutcome;
pub use state::{ChartState, DragState};
