//! Guest directory views
//!
//! Read-only partitions of the externally-owned guest list. These are
//! plain filters so the sidebar and the table rosters can never disagree
//! with the canonical list.

use crate::engine::SeatingEngine;
use crate::gateway::PersistenceGateway;
use shared::models::Guest;
use shared::{SeatingError, SeatingResult};
use std::collections::BTreeMap;

/// Guests with no seat in any chart
pub fn unassigned(guests: &[Guest]) -> Vec<&Guest> {
    guests.iter().filter(|g| g.is_unassigned()).collect()
}

/// Guests holding a seat somewhere
pub fn assigned(guests: &[Guest]) -> Vec<&Guest> {
    guests.iter().filter(|g| !g.is_unassigned()).collect()
}

/// Unassigned guests grouped by party label, ungrouped under ""
pub fn grouped_unassigned(guests: &[Guest]) -> BTreeMap<String, Vec<&Guest>> {
    let mut groups: BTreeMap<String, Vec<&Guest>> = BTreeMap::new();
    for guest in guests.iter().filter(|g| g.is_unassigned()) {
        groups
            .entry(guest.group_name.clone().unwrap_or_default())
            .or_default()
            .push(guest);
    }
    groups
}

impl<G: PersistenceGateway> SeatingEngine<G> {
    /// Fetch the wedding's full guest list into the `guests` slice
    pub async fn load_guests(&mut self) -> SeatingResult<&[Guest]> {
        let guests = self
            .gateway
            .list_guests(&self.wedding_id)
            .await
            .map_err(|e| SeatingError::persistence("load_guests", e))?;
        self.state.guests = guests;
        Ok(&self.state.guests)
    }

    pub fn unassigned_guests(&self) -> Vec<&Guest> {
        unassigned(&self.state.guests)
    }

    pub fn grouped_unassigned_guests(&self) -> BTreeMap<String, Vec<&Guest>> {
        grouped_unassigned(&self.state.guests)
    }
}
