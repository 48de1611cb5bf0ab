//! Floor Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::FloorTable;
use shared::models::{FloorTableCreate, TablePosition};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "floor_table";

#[derive(Clone)]
pub struct FloorTableRepository {
    base: BaseRepository,
}

impl FloorTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tables in a chart, in table-number order
    pub async fn find_by_chart(&self, chart_id: &str) -> RepoResult<Vec<FloorTable>> {
        let chart_thing = self.base.parse_id(chart_id)?;
        let tables: Vec<FloorTable> = self
            .base
            .db()
            .query("SELECT * FROM floor_table WHERE chart = $chart ORDER BY table_number")
            .bind(("chart", chart_thing))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<FloorTable>> {
        let thing = self.base.parse_id(id)?;
        let table: Option<FloorTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find table by number in chart
    pub async fn find_by_number_in_chart(
        &self,
        chart: &RecordId,
        table_number: i64,
    ) -> RepoResult<Option<FloorTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM floor_table WHERE chart = $chart AND table_number = $number LIMIT 1")
            .bind(("chart", chart.clone()))
            .bind(("number", table_number))
            .await?;
        let tables: Vec<FloorTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Highest table number currently used in a chart, 0 when empty
    async fn max_table_number(&self, chart: &RecordId) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE table_number FROM floor_table WHERE chart = $chart")
            .bind(("chart", chart.clone()))
            .await?;
        let numbers: Vec<i64> = result.take(0)?;
        Ok(numbers.into_iter().max().unwrap_or(0))
    }

    /// Create a new floor table
    ///
    /// A missing `table_number` takes max + 1; a number already present
    /// in the chart is rejected.
    pub async fn create(&self, data: FloorTableCreate) -> RepoResult<FloorTable> {
        let chart = self.base.parse_id(&data.chart_id)?;

        let table_number = match data.table_number {
            Some(n) => n,
            None => self.max_table_number(&chart).await? + 1,
        };

        if self
            .find_by_number_in_chart(&chart, table_number)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table number {table_number} already exists in this chart"
            )));
        }

        let table = FloorTable {
            id: None,
            chart,
            table_number,
            name: data.name,
            shape: data.shape,
            capacity: data.capacity,
            x: data.x,
            y: data.y,
            rotation: data.rotation,
            notes: data.notes,
        };

        let created: Option<FloorTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create floor table".to_string()))
    }

    /// Update a table's canvas position and nothing else
    pub async fn update_position(&self, id: &str, pos: TablePosition) -> RepoResult<FloorTable> {
        let thing = self.base.parse_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Floor table {id} not found")))?;

        self.base
            .db()
            .query("UPDATE $thing SET x = $x, y = $y")
            .bind(("thing", thing))
            .bind(("x", pos.x))
            .bind(("y", pos.y))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Floor table {id} not found")))
    }

    /// Hard delete a floor table
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Floor table {id} not found")))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
