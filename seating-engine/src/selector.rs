//! Chart selector
//!
//! Thin coordination over the wedding's chart list: which charts exist
//! and which one is in focus. Selection is client state only; no
//! persistence call is ever issued for it. Deleting a chart is the one
//! heavy operation here, since seats under its table numbers must be
//! released before the geometry goes away.

use crate::engine::SeatingEngine;
use crate::gateway::PersistenceGateway;
use crate::state::DragState;
use shared::models::{SeatingChart, SeatingChartCreate};
use shared::{SeatingError, SeatingResult};
use tracing::info;

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Fetch the wedding's charts; the first one (if any) becomes the
    /// selection so dependent views have something to render
    pub async fn load_charts(&mut self) -> SeatingResult<&[SeatingChart]> {
        let charts = self
            .gateway
            .list_charts(&self.wedding_id)
            .await
            .map_err(|e| SeatingError::persistence("load_charts", e))?;
        self.state.charts = charts;
        self.state.selected_chart = self
            .state
            .charts
            .first()
            .and_then(|c| c.id.clone());
        self.state.tables.clear();
        self.state.drag = DragState::Idle;
        Ok(&self.state.charts)
    }

    /// Create a chart and focus it
    pub async fn create_chart(&mut self, mut data: SeatingChartCreate) -> SeatingResult<SeatingChart> {
        data.wedding_id = self.wedding_id.clone();
        let chart = self
            .gateway
            .create_chart(data)
            .await
            .map_err(|e| SeatingError::persistence("create_chart", e))?;
        info!(chart = %chart.name, "chart created");
        self.state.charts.push(chart.clone());
        self.state.selected_chart = chart.id.clone();
        self.state.tables.clear();
        self.state.drag = DragState::Idle;
        Ok(chart)
    }

    /// Focus a chart; pure client-side change
    ///
    /// The `tables` slice is cleared for reload; stale geometry from the
    /// previous chart must never render under the new selection.
    pub fn select_chart(&mut self, chart_id: &str) -> SeatingResult<()> {
        if !self
            .state
            .charts
            .iter()
            .any(|c| c.id.as_deref() == Some(chart_id))
        {
            return Err(SeatingError::not_found(format!("chart {chart_id}")));
        }
        self.state.selected_chart = Some(chart_id.to_string());
        self.state.tables.clear();
        self.state.drag = DragState::Idle;
        Ok(())
    }

    /// Delete a chart after releasing every guest seated in it
    ///
    /// The chart's table numbers are fetched fresh (the chart need not be
    /// the selected one), each matching guest's seat is released and
    /// persisted, and only then is the chart deleted (storage cascades
    /// the table rows. Any failed release aborts with the chart intact.
    pub async fn delete_chart(&mut self, chart_id: &str) -> SeatingResult<()> {
        let chart = self
            .state
            .charts
            .iter()
            .find(|c| c.id.as_deref() == Some(chart_id))
            .cloned()
            .ok_or_else(|| SeatingError::not_found(format!("chart {chart_id}")))?;

        let tables = self
            .gateway
            .list_tables(chart_id)
            .await
            .map_err(|e| SeatingError::persistence("delete_chart", e))?;
        let numbers: Vec<i64> = tables.iter().map(|t| t.table_number).collect();

        let seated: Vec<String> = self
            .state
            .guests
            .iter()
            .filter(|g| g.table_number.is_some_and(|n| numbers.contains(&n)))
            .filter_map(|g| g.id.clone())
            .collect();
        for guest_id in &seated {
            let released = self
                .gateway
                .update_guest_seat(guest_id, None)
                .await
                .map_err(|e| SeatingError::persistence("delete_chart", e))?;
            self.state.patch_guest(released);
        }

        self.gateway
            .delete_chart(chart_id)
            .await
            .map_err(|e| SeatingError::persistence("delete_chart", e))?;

        info!(chart = %chart.name, released = seated.len(), "chart deleted");
        self.state
            .charts
            .retain(|c| c.id.as_deref() != Some(chart_id));

        if self.state.selected_chart.as_deref() == Some(chart_id) {
            self.state.selected_chart = self
                .state
                .charts
                .first()
                .and_then(|c| c.id.clone());
            self.state.tables.clear();
            self.state.drag = DragState::Idle;
        }
        Ok(())
    }
}
