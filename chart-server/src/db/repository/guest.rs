//! Guest Repository
//!
//! The guest list is owned by the guest-list feature; this repository
//! exists so the seating API can read it and write the single field the
//! engine controls. `update_seat` accepts any number on purpose: seat
//! capacity is the engine's advisory check, not a storage constraint.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Guest;
use shared::models::GuestCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "guest";

#[derive(Clone)]
pub struct GuestRepository {
    base: BaseRepository,
}

impl GuestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all guests of a wedding
    pub async fn find_by_wedding(&self, wedding_id: &str) -> RepoResult<Vec<Guest>> {
        let guests: Vec<Guest> = self
            .base
            .db()
            .query("SELECT * FROM guest WHERE wedding_id = $wedding ORDER BY name")
            .bind(("wedding", wedding_id.to_string()))
            .await?
            .take(0)?;
        Ok(guests)
    }

    /// Find guest by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Guest>> {
        let thing = self.base.parse_id(id)?;
        let guest: Option<Guest> = self.base.db().select(thing).await?;
        Ok(guest)
    }

    /// Create a guest (guest-list CRUD path, unassigned by definition)
    pub async fn create(&self, data: GuestCreate) -> RepoResult<Guest> {
        let guest = Guest {
            id: None,
            wedding_id: data.wedding_id,
            name: data.name,
            group_name: data.group_name,
            table_number: None,
            notes: data.notes,
        };

        let created: Option<Guest> = self.base.db().create(TABLE).content(guest).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create guest".to_string()))
    }

    /// Write the guest's seat; `None` releases it
    pub async fn update_seat(&self, id: &str, table_number: Option<i64>) -> RepoResult<Guest> {
        let thing = self.base.parse_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Guest {id} not found")))?;

        self.base
            .db()
            .query("UPDATE $thing SET table_number = $number")
            .bind(("thing", thing))
            .bind(("number", table_number))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Guest {id} not found")))
    }
}
