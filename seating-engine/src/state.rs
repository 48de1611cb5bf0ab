//! Engine state slices
//!
//! [`ChartState`] holds the only mutable data in the subsystem: the chart
//! list, the selection, and the canonical table and guest lists for the
//! selected chart. Everything the UI renders beyond these (rosters,
//! occupancy, the unassigned sidebar) is recomputed from them on demand,
//! so the slices can never drift apart from a derived copy.

use shared::models::{FloorTable, Guest, SeatingChart, TablePosition};

/// Interactive drag in progress, at most one per engine
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A table is being repositioned; `origin` is the revert point
    Table {
        table_id: String,
        origin: TablePosition,
    },
    /// A guest chip is being dragged toward a table
    Guest { guest_id: String },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// The four state slices exposed to the hosting UI
#[derive(Debug, Default)]
pub struct ChartState {
    pub(crate) charts: Vec<SeatingChart>,
    pub(crate) selected_chart: Option<String>,
    pub(crate) tables: Vec<FloorTable>,
    pub(crate) guests: Vec<Guest>,
    pub(crate) drag: DragState,
}

impl ChartState {
    pub fn charts(&self) -> &[SeatingChart] {
        &self.charts
    }

    /// Id of the chart currently in focus
    pub fn selected_chart_id(&self) -> Option<&str> {
        self.selected_chart.as_deref()
    }

    pub fn selected_chart(&self) -> Option<&SeatingChart> {
        let id = self.selected_chart.as_deref()?;
        self.charts.iter().find(|c| c.id.as_deref() == Some(id))
    }

    pub fn tables(&self) -> &[FloorTable] {
        &self.tables
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub(crate) fn table_by_id(&self, table_id: &str) -> Option<&FloorTable> {
        self.tables.iter().find(|t| t.id.as_deref() == Some(table_id))
    }

    pub(crate) fn guest_by_id(&self, guest_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id.as_deref() == Some(guest_id))
    }

    /// Replace the stored copy of a guest after a confirmed persist
    pub(crate) fn patch_guest(&mut self, updated: Guest) {
        if let Some(slot) = self.guests.iter_mut().find(|g| g.id == updated.id) {
            *slot = updated;
        }
    }

    /// Replace the stored copy of a table after a confirmed persist
    pub(crate) fn patch_table(&mut self, updated: FloorTable) {
        if let Some(slot) = self.tables.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }
}
