//! Guest/table binding with capacity enforcement
//!
//! Occupancy is always derived by filtering the canonical guest list
//! against a table's number; there is no stored roster to keep in sync.
//! The capacity check runs before the seat write is issued, so this
//! engine never knowingly creates an over-capacity table; over-capacity
//! arriving from out-of-band guest edits is reported, not repaired.

use crate::engine::SeatingEngine;
use crate::gateway::PersistenceGateway;
use shared::models::{FloorTable, Guest};
use shared::{SeatingError, SeatingResult};
use tracing::info;

/// Derived seating snapshot for one table
#[derive(Debug)]
pub struct Occupancy<'a> {
    pub table_number: i64,
    pub capacity: i32,
    pub seated: Vec<&'a Guest>,
}

impl Occupancy<'_> {
    pub fn count(&self) -> usize {
        self.seated.len()
    }

    pub fn is_full(&self) -> bool {
        self.count() >= self.capacity.max(0) as usize
    }

    /// True when out-of-band data has pushed the table past its capacity
    pub fn is_over(&self) -> bool {
        self.count() > self.capacity.max(0) as usize
    }

    pub fn seats_remaining(&self) -> usize {
        (self.capacity.max(0) as usize).saturating_sub(self.count())
    }
}

/// Seating snapshot for `table`, derived from the canonical guest list
///
/// A table number no guest references yields an empty roster; a number no
/// table owns is equally harmless: stale references degrade to zero
/// matches instead of failing.
pub fn occupancy<'a>(table: &FloorTable, guests: &'a [Guest]) -> Occupancy<'a> {
    let seated = guests
        .iter()
        .filter(|g| g.is_seated_at(table.table_number))
        .collect();
    Occupancy {
        table_number: table.table_number,
        capacity: table.capacity,
        seated,
    }
}

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Seat a guest at a table, subject to the capacity check
    ///
    /// The guest being moved is excluded from the occupancy count, so a
    /// one-gesture move between tables is judged against the post-release
    /// list and a re-drop onto the guest's own full table stays legal.
    pub async fn assign_guest(&mut self, guest_id: &str, table_id: &str) -> SeatingResult<Guest> {
        let guest = self.require_guest(guest_id)?;
        let table = self.require_table(table_id)?;

        let occupied = self
            .state
            .guests
            .iter()
            .filter(|g| g.is_seated_at(table.table_number) && g.id.as_deref() != Some(guest_id))
            .count();
        if occupied >= table.capacity.max(0) as usize {
            return Err(SeatingError::CapacityExceeded {
                table_number: table.table_number,
                capacity: table.capacity,
            });
        }

        let updated = self
            .gateway
            .update_guest_seat(guest_id, Some(table.table_number))
            .await
            .map_err(|e| SeatingError::persistence("assign_guest", e))?;

        info!(
            guest = %guest.name,
            table_number = table.table_number,
            "guest seated"
        );
        self.state.patch_guest(updated.clone());
        Ok(updated)
    }

    /// Clear a guest's seat
    ///
    /// Releasing an already-unassigned guest is a no-op: no error, no
    /// state change, no storage call.
    pub async fn release_guest(&mut self, guest_id: &str) -> SeatingResult<Guest> {
        let guest = self.require_guest(guest_id)?;
        if guest.is_unassigned() {
            return Ok(guest);
        }

        let updated = self
            .gateway
            .update_guest_seat(guest_id, None)
            .await
            .map_err(|e| SeatingError::persistence("release_guest", e))?;

        info!(guest = %guest.name, "guest released");
        self.state.patch_guest(updated.clone());
        Ok(updated)
    }

    /// Derived roster for one loaded table
    pub fn table_occupancy(&self, table_id: &str) -> SeatingResult<Occupancy<'_>> {
        let table = self
            .state
            .table_by_id(table_id)
            .ok_or_else(|| SeatingError::not_found(format!("table {table_id}")))?;
        Ok(occupancy(table, &self.state.guests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableShape;

    fn table(number: i64, capacity: i32) -> FloorTable {
        FloorTable {
            id: Some(format!("floor_table:{number}")),
            chart_id: "seating_chart:1".into(),
            table_number: number,
            name: None,
            shape: TableShape::Round,
            capacity,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            notes: None,
        }
    }

    fn guest(name: &str, table_number: Option<i64>) -> Guest {
        Guest {
            id: Some(format!("guest:{name}")),
            wedding_id: "wedding:1".into(),
            name: name.into(),
            group_name: None,
            table_number,
            notes: None,
        }
    }

    #[test]
    fn occupancy_filters_by_table_number() {
        let guests = vec![
            guest("amy", Some(5)),
            guest("ben", Some(5)),
            guest("cara", Some(3)),
            guest("dana", None),
        ];
        let occ = occupancy(&table(5, 4), &guests);
        assert_eq!(occ.count(), 2);
        assert_eq!(occ.seats_remaining(), 2);
        assert!(!occ.is_full());
    }

    #[test]
    fn occupancy_tolerates_stale_numbers() {
        // number 9 has no guests; guests at 99 reference no table
        let guests = vec![guest("amy", Some(99))];
        let occ = occupancy(&table(9, 4), &guests);
        assert_eq!(occ.count(), 0);
        assert!(!occ.is_over());
    }

    #[test]
    fn over_capacity_is_reported_not_hidden() {
        let guests = vec![
            guest("amy", Some(2)),
            guest("ben", Some(2)),
            guest("cara", Some(2)),
        ];
        let occ = occupancy(&table(2, 2), &guests);
        assert!(occ.is_full());
        assert!(occ.is_over());
        assert_eq!(occ.seats_remaining(), 0);
    }

    #[test]
    fn zero_capacity_table_is_always_full() {
        let occ = occupancy(&table(1, 0), &[]);
        assert!(occ.is_full());
        assert!(!occ.is_over());
    }
}
