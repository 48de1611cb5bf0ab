//! Layout controller
//!
//! Translates drag gestures into engine calls. A table drop applies its
//! position to the slice before the storage call goes out, so the canvas
//! never freezes mid-gesture; a failed persist reverts to the position
//! captured when the drag began and reports [`MoveOutcome::RolledBack`]
//! instead of raising. Guest drops carry no optimistic step; a rejected
//! assignment leaves the chip in the unassigned list.

use crate::engine::SeatingEngine;
use crate::gateway::PersistenceGateway;
use crate::state::DragState;
use shared::models::{FloorTable, Guest, TablePosition};
use shared::{SeatingError, SeatingResult};
use tracing::{info, warn};

/// Result of an optimistic table move
///
/// Rollback is an expected outcome the UI renders inline (chip snaps
/// back, error toast), not an exceptional path, hence a variant rather
/// than an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Persisted; carries the confirmed table row
    Committed(FloorTable),
    /// Persist failed; the position was reverted to the drag origin
    RolledBack { reason: SeatingError },
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed(_))
    }
}

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Start repositioning a table, capturing the revert point
    ///
    /// Beginning a drag while another is active replaces it; nothing has
    /// been applied yet at that point, so there is nothing to undo.
    pub fn begin_table_drag(&mut self, table_id: &str) -> SeatingResult<()> {
        let table = self.require_table(table_id)?;
        self.state.drag = DragState::Table {
            table_id: table_id.to_string(),
            origin: table.position(),
        };
        Ok(())
    }

    /// Start dragging a guest chip
    pub fn begin_guest_drag(&mut self, guest_id: &str) -> SeatingResult<()> {
        self.require_guest(guest_id)?;
        self.state.drag = DragState::Guest {
            guest_id: guest_id.to_string(),
        };
        Ok(())
    }

    /// Abandon the gesture; engine state was never touched mid-drag
    pub fn cancel_drag(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// Drop the dragged table at canvas coordinates
    ///
    /// Applies optimistically, persists, reverts on failure. Ends the
    /// drag on every path.
    pub async fn drop_table(&mut self, pos: TablePosition) -> SeatingResult<MoveOutcome> {
        // taking the drag ends the gesture on every path, mismatch included
        let DragState::Table { table_id, origin } = std::mem::take(&mut self.state.drag) else {
            return Err(SeatingError::NoActiveDrag);
        };

        // optimistic apply before the network suspension point
        let table = self
            .state
            .tables
            .iter_mut()
            .find(|t| t.id.as_deref() == Some(table_id.as_str()))
            .ok_or_else(|| SeatingError::not_found(format!("table {table_id}")))?;
        table.x = pos.x;
        table.y = pos.y;

        match self.gateway.update_table_position(&table_id, pos).await {
            Ok(confirmed) => {
                self.state.patch_table(confirmed.clone());
                Ok(MoveOutcome::Committed(confirmed))
            }
            Err(e) => {
                let reason = SeatingError::persistence("update_table_position", e);
                warn!(%table_id, %reason, "position persist failed, reverting");
                if let Some(table) = self
                    .state
                    .tables
                    .iter_mut()
                    .find(|t| t.id.as_deref() == Some(table_id.as_str()))
                {
                    table.x = origin.x;
                    table.y = origin.y;
                }
                Ok(MoveOutcome::RolledBack { reason })
            }
        }
    }

    /// Drop the dragged guest onto a table
    ///
    /// Delegates to the capacity-checked assignment; on
    /// [`SeatingError::CapacityExceeded`] nothing moved and the caller
    /// shows the error next to the table.
    pub async fn drop_guest_on_table(&mut self, table_id: &str) -> SeatingResult<Guest> {
        let DragState::Guest { guest_id } = std::mem::take(&mut self.state.drag) else {
            return Err(SeatingError::NoActiveDrag);
        };
        let seated = self.assign_guest(&guest_id, table_id).await?;
        info!(guest = %seated.name, %table_id, "guest dropped on table");
        Ok(seated)
    }

    /// Explicit "remove from table" action (not a drag)
    pub async fn remove_guest_from_table(&mut self, guest_id: &str) -> SeatingResult<Guest> {
        self.release_guest(guest_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::memory::MemoryGateway;

    async fn engine_with_table() -> (SeatingEngine<MemoryGateway>, String) {
        let gateway = MemoryGateway::new();
        let chart = gateway.seed_chart("wedding:1", "main hall");
        let table_id = gateway.seed_table(&chart, 1, 4);
        let mut engine = SeatingEngine::new("wedding:1", gateway);
        engine.load_charts().await.unwrap();
        engine.load_tables().await.unwrap();
        (engine, table_id)
    }

    #[tokio::test]
    async fn drop_commits_position() {
        let (mut engine, table_id) = engine_with_table().await;
        engine.begin_table_drag(&table_id).unwrap();
        let outcome = engine
            .drop_table(TablePosition { x: 250.0, y: 125.0 })
            .await
            .unwrap();

        assert!(outcome.is_committed());
        let stored = engine.gateway.stored_table(&table_id).unwrap();
        assert_eq!((stored.x, stored.y), (250.0, 125.0));
        assert!(engine.state().drag().is_idle());
    }

    #[tokio::test]
    async fn failed_drop_reverts_to_origin() {
        let (mut engine, table_id) = engine_with_table().await;
        engine.begin_table_drag(&table_id).unwrap();
        engine.gateway.inject_failure("update_table_position", 1);

        let outcome = engine
            .drop_table(TablePosition { x: 250.0, y: 125.0 })
            .await
            .unwrap();

        let MoveOutcome::RolledBack { reason } = outcome else {
            panic!("expected rollback");
        };
        assert!(reason.is_retryable());
        let table = engine.require_table(&table_id).unwrap();
        assert_eq!((table.x, table.y), (0.0, 0.0));
        // storage kept the old position too
        let stored = engine.gateway.stored_table(&table_id).unwrap();
        assert_eq!((stored.x, stored.y), (0.0, 0.0));
        assert!(engine.state().drag().is_idle());
    }

    #[tokio::test]
    async fn drop_without_drag_is_rejected() {
        let (mut engine, table_id) = engine_with_table().await;
        let err = engine
            .drop_table(TablePosition { x: 1.0, y: 1.0 })
            .await
            .unwrap_err();
        assert_eq!(err, SeatingError::NoActiveDrag);

        // a guest drop against a table drag is equally invalid
        engine.begin_table_drag(&table_id).unwrap();
        let err = engine.drop_guest_on_table(&table_id).await.unwrap_err();
        assert_eq!(err, SeatingError::NoActiveDrag);
        assert!(engine.state().drag().is_idle());
    }

    #[tokio::test]
    async fn cancel_leaves_position_untouched() {
        let (mut engine, table_id) = engine_with_table().await;
        engine.begin_table_drag(&table_id).unwrap();
        engine.cancel_drag();
        let table = engine.require_table(&table_id).unwrap();
        assert_eq!((table.x, table.y), (0.0, 0.0));
        assert_eq!(engine.gateway.call_count("update_table_position"), 0);
    }

    #[tokio::test]
    async fn rejected_guest_drop_keeps_chip_unassigned() {
        let (mut engine, table_id) = engine_with_table().await;
        // fill table 1 (capacity 4)
        for name in ["amy", "ben", "cara", "dana"] {
            engine.gateway.seed_guest("wedding:1", name, Some(1));
        }
        let eve = engine.gateway.seed_guest("wedding:1", "eve", None);
        engine.load_guests().await.unwrap();

        engine.begin_guest_drag(&eve).unwrap();
        let err = engine.drop_guest_on_table(&table_id).await.unwrap_err();
        assert_eq!(
            err,
            SeatingError::CapacityExceeded {
                table_number: 1,
                capacity: 4
            }
        );
        assert_eq!(engine.unassigned_guests().len(), 1);
        assert_eq!(engine.gateway.stored_guest(&eve).unwrap().table_number, None);
    }
}
