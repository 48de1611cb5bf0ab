//! Table registry
//!
//! Creation, deletion, and geometry of the selected chart's tables. Every
//! operation here persists first and applies to the slice after
//! confirmation; the optimistic path exists only in the layout
//! controller. Deleting a table is not a pure registry operation: seats
//! at that table are released (and persisted) before the row goes away.

use crate::engine::SeatingEngine;
use crate::gateway::{GatewayError, PersistenceGateway};
use shared::models::{FloorTable, FloorTableCreate, TablePosition};
use shared::{SeatingError, SeatingResult};
use tracing::{info, warn};

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Fetch the selected chart's tables into the `tables` slice
    pub async fn load_tables(&mut self) -> SeatingResult<&[FloorTable]> {
        let chart_id = self.require_chart()?;
        let tables = self
            .gateway
            .list_tables(&chart_id)
            .await
            .map_err(|e| SeatingError::persistence("load_tables", e))?;
        self.state.tables = tables;
        Ok(&self.state.tables)
    }

    /// Next free table number in the selected chart (max existing + 1)
    pub fn next_table_number(&self) -> i64 {
        self.state
            .tables
            .iter()
            .map(|t| t.table_number)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Add a table to the selected chart
    ///
    /// A `table_number` of `None` takes the next free number. Numbers
    /// already present in the chart are rejected before anything is sent.
    pub async fn create_table(&mut self, mut spec: FloorTableCreate) -> SeatingResult<FloorTable> {
        let chart_id = self.require_chart()?;
        spec.chart_id = chart_id;

        let table_number = spec.table_number.unwrap_or_else(|| self.next_table_number());
        spec.table_number = Some(table_number);

        if self
            .state
            .tables
            .iter()
            .any(|t| t.table_number == table_number)
        {
            return Err(SeatingError::DuplicateTableNumber { table_number });
        }
        if spec.capacity < 1 {
            // tolerated (the model does not hard-enforce it) but worth a trace
            warn!(table_number, capacity = spec.capacity, "table created with no seats");
        }

        let table = self
            .gateway
            .create_table(spec)
            .await
            .map_err(|e| match e {
                // someone else took the number since our slice was loaded
                GatewayError::Conflict(_) => SeatingError::DuplicateTableNumber { table_number },
                other => SeatingError::persistence("create_table", other),
            })?;

        info!(table_number, capacity = table.capacity, "table created");
        self.state.tables.push(table.clone());
        Ok(table)
    }

    /// Persist a table position, then apply it to the slice
    ///
    /// This is the confirmed (non-optimistic) path used outside drag
    /// gestures; it touches nothing but x/y.
    pub async fn update_table_position(
        &mut self,
        table_id: &str,
        pos: TablePosition,
    ) -> SeatingResult<FloorTable> {
        self.require_table(table_id)?;
        let updated = self
            .gateway
            .update_table_position(table_id, pos)
            .await
            .map_err(|e| SeatingError::persistence("update_table_position", e))?;
        self.state.patch_table(updated.clone());
        Ok(updated)
    }

    /// Delete a table, releasing every guest seated at it first
    ///
    /// Releases are persisted one by one; the first failure aborts the
    /// whole operation and the table stays. Only after every seat is
    /// confirmed clear is the row deleted.
    pub async fn delete_table(&mut self, table_id: &str) -> SeatingResult<()> {
        let table = self.require_table(table_id)?;

        let seated: Vec<String> = self
            .state
            .guests
            .iter()
            .filter(|g| g.is_seated_at(table.table_number))
            .filter_map(|g| g.id.clone())
            .collect();

        for guest_id in &seated {
            let released = self
                .gateway
                .update_guest_seat(guest_id, None)
                .await
                .map_err(|e| SeatingError::persistence("delete_table", e))?;
            self.state.patch_guest(released);
        }

        self.gateway
            .delete_table(table_id)
            .await
            .map_err(|e| SeatingError::persistence("delete_table", e))?;

        info!(
            table_number = table.table_number,
            released = seated.len(),
            "table deleted"
        );
        self.state.tables.retain(|t| t.id.as_deref() != Some(table_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::memory::MemoryGateway;
    use shared::models::TableShape;

    fn spec(number: Option<i64>, capacity: i32) -> FloorTableCreate {
        FloorTableCreate {
            chart_id: String::new(),
            table_number: number,
            name: None,
            shape: TableShape::Round,
            capacity,
            x: 40.0,
            y: 60.0,
            rotation: 0.0,
            notes: None,
        }
    }

    async fn engine_with_chart() -> SeatingEngine<MemoryGateway> {
        let gateway = MemoryGateway::new();
        gateway.seed_chart("wedding:1", "main hall");
        let mut engine = SeatingEngine::new("wedding:1", gateway);
        engine.load_charts().await.unwrap();
        engine.load_tables().await.unwrap();
        engine
    }

    #[tokio::test]
    async fn create_numbers_tables_sequentially() {
        let mut engine = engine_with_chart().await;
        let first = engine.create_table(spec(None, 8)).await.unwrap();
        let second = engine.create_table(spec(None, 8)).await.unwrap();
        assert_eq!(first.table_number, 1);
        assert_eq!(second.table_number, 2);
        assert_eq!(engine.state().tables().len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_number() {
        let mut engine = engine_with_chart().await;
        engine.create_table(spec(Some(4), 8)).await.unwrap();
        let err = engine.create_table(spec(Some(4), 6)).await.unwrap_err();
        assert_eq!(err, SeatingError::DuplicateTableNumber { table_number: 4 });
        assert_eq!(engine.state().tables().len(), 1);
    }

    #[tokio::test]
    async fn operations_without_selection_fail_fast() {
        let mut engine = SeatingEngine::new("wedding:1", MemoryGateway::new());
        let err = engine.create_table(spec(None, 8)).await.unwrap_err();
        assert_eq!(err, SeatingError::NoChartSelected);
        assert_eq!(err, engine.load_tables().await.unwrap_err());
    }

    #[tokio::test]
    async fn delete_releases_seats_before_the_row() {
        let mut engine = engine_with_chart().await;
        let table = engine.create_table(spec(Some(3), 4)).await.unwrap();
        let amy = engine.gateway.seed_guest("wedding:1", "amy", Some(3));
        let ben = engine.gateway.seed_guest("wedding:1", "ben", Some(3));
        engine.load_guests().await.unwrap();

        engine.delete_table(table.id.as_deref().unwrap()).await.unwrap();

        assert!(engine.state().tables().is_empty());
        assert_eq!(engine.gateway.stored_guest(&amy).unwrap().table_number, None);
        assert_eq!(engine.gateway.stored_guest(&ben).unwrap().table_number, None);
        assert_eq!(engine.unassigned_guests().len(), 2);
    }

    #[tokio::test]
    async fn delete_aborts_when_a_release_fails() {
        let mut engine = engine_with_chart().await;
        let table = engine.create_table(spec(Some(3), 4)).await.unwrap();
        engine.gateway.seed_guest("wedding:1", "amy", Some(3));
        engine.gateway.seed_guest("wedding:1", "ben", Some(3));
        engine.load_guests().await.unwrap();

        engine.gateway.inject_failure("update_guest_seat", 1);
        let err = engine
            .delete_table(table.id.as_deref().unwrap())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        // the table survived and was never deleted from storage
        assert_eq!(engine.state().tables().len(), 1);
        assert_eq!(engine.gateway.call_count("delete_table"), 0);
    }

    #[tokio::test]
    async fn empty_table_delete_touches_no_guests() {
        let mut engine = engine_with_chart().await;
        let table = engine.create_table(spec(Some(3), 4)).await.unwrap();
        engine.gateway.seed_guest("wedding:1", "amy", None);
        engine.load_guests().await.unwrap();

        engine.delete_table(table.id.as_deref().unwrap()).await.unwrap();

        assert!(engine.state().tables().is_empty());
        assert_eq!(engine.gateway.call_count("update_guest_seat"), 0);
    }
}
