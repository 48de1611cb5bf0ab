//! Seating Chart Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SeatingChart;
use shared::models::SeatingChartCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "seating_chart";

#[derive(Clone)]
pub struct SeatingChartRepository {
    base: BaseRepository,
}

impl SeatingChartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all charts belonging to a wedding
    pub async fn find_by_wedding(&self, wedding_id: &str) -> RepoResult<Vec<SeatingChart>> {
        let charts: Vec<SeatingChart> = self
            .base
            .db()
            .query("SELECT * FROM seating_chart WHERE wedding_id = $wedding ORDER BY name")
            .bind(("wedding", wedding_id.to_string()))
            .await?
            .take(0)?;
        Ok(charts)
    }

    /// Find chart by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<SeatingChart>> {
        let thing = self.base.parse_id(id)?;
        let chart: Option<SeatingChart> = self.base.db().select(thing).await?;
        Ok(chart)
    }

    /// Create a new seating chart
    pub async fn create(&self, data: SeatingChartCreate) -> RepoResult<SeatingChart> {
        let chart = SeatingChart {
            id: None,
            wedding_id: data.wedding_id,
            name: data.name,
            venue_name: data.venue_name,
            layout_data: None,
            is_active: true,
        };

        let created: Option<SeatingChart> = self.base.db().create(TABLE).content(chart).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create seating chart".to_string()))
    }

    /// Delete a chart and every table it owns
    ///
    /// Guest seats are the caller's concern: the engine releases them
    /// before issuing this delete.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Seating chart {id} not found")))?;

        self.base
            .db()
            .query("DELETE floor_table WHERE chart = $chart")
            .bind(("chart", thing.clone()))
            .await?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
