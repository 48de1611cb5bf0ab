//! Engine façade
//!
//! [`SeatingEngine`] owns the state slices and the gateway, and is the
//! single entry point for the hosting UI. The component impls live in
//! their own modules (`selector`, `registry`, `assignment`, `directory`,
//! `layout`); this module holds construction and the shared lookups.

use crate::gateway::PersistenceGateway;
use crate::state::ChartState;
use shared::models::{FloorTable, Guest};
use shared::{SeatingError, SeatingResult};

/// Client-side seating engine for one wedding
pub struct SeatingEngine<G> {
    pub(crate) wedding_id: String,
    pub(crate) gateway: G,
    pub(crate) state: ChartState,
}

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Create an engine with empty state; call
    /// [`load_charts`](Self::load_charts) and
    /// [`load_guests`](Self::load_guests) to populate it.
    pub fn new(wedding_id: impl Into<String>, gateway: G) -> Self {
        Self {
            wedding_id: wedding_id.into(),
            gateway,
            state: ChartState::default(),
        }
    }

    pub fn wedding_id(&self) -> &str {
        &self.wedding_id
    }

    /// Read access to the state slices
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// The storage boundary this engine persists through
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The selected chart id, or the error every chart-scoped operation
    /// reports without one
    pub(crate) fn require_chart(&self) -> SeatingResult<String> {
        self.state
            .selected_chart
            .clone()
            .ok_or(SeatingError::NoChartSelected)
    }

    pub(crate) fn require_table(&self, table_id: &str) -> SeatingResult<FloorTable> {
        self.state
            .table_by_id(table_id)
            .cloned()
            .ok_or_else(|| SeatingError::not_found(format!("table {table_id}")))
    }

    pub(crate) fn require_guest(&self, guest_id: &str) -> SeatingResult<Guest> {
        self.state
            .guest_by_id(guest_id)
            .cloned()
            .ok_or_else(|| SeatingError::not_found(format!("guest {guest_id}")))
    }
}
