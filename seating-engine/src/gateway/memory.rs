//! In-process gateway backed by plain maps
//!
//! Serves two purposes: a storage stand-in for tests and demos, and a
//! failure-injection harness: every rollback guarantee in the engine is
//! exercised by scripting this gateway to refuse specific operations.

use super::{GatewayError, GatewayResult, PersistenceGateway};
use async_trait::async_trait;
use shared::models::{
    FloorTable, FloorTableCreate, Guest, SeatingChart, SeatingChartCreate, TablePosition,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Store {
    charts: HashMap<String, SeatingChart>,
    tables: HashMap<String, FloorTable>,
    guests: HashMap<String, Guest>,
    next_id: u64,
    /// Operation name -> number of upcoming calls to refuse
    failures: HashMap<String, usize>,
    /// Every operation invoked, in order
    calls: Vec<String>,
}

impl Store {
    fn next_id(&mut self, table: &str) -> String {
        self.next_id += 1;
        format!("{}:{}", table, self.next_id)
    }

    /// Record the call and consume one scripted failure if present
    fn enter(&mut self, op: &str) -> GatewayResult<()> {
        self.calls.push(op.to_string());
        if let Some(remaining) = self.failures.get_mut(op) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(GatewayError::Unavailable(format!("injected failure: {op}")));
            }
        }
        Ok(())
    }
}

/// In-memory storage double
#[derive(Default)]
pub struct MemoryGateway {
    store: Mutex<Store>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the next `times` calls of the named operation
    pub fn inject_failure(&self, operation: &str, times: usize) {
        let mut store = self.store.lock().unwrap();
        *store.failures.entry(operation.to_string()).or_insert(0) += times;
    }

    /// How many times the named operation has been invoked
    pub fn call_count(&self, operation: &str) -> usize {
        let store = self.store.lock().unwrap();
        store.calls.iter().filter(|c| c.as_str() == operation).count()
    }

    // ---- seeding helpers ----

    pub fn seed_chart(&self, wedding_id: &str, name: &str) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("seating_chart");
        store.charts.insert(
            id.clone(),
            SeatingChart {
                id: Some(id.clone()),
                wedding_id: wedding_id.to_string(),
                name: name.to_string(),
                venue_name: None,
                layout_data: None,
                is_active: true,
            },
        );
        id
    }

    pub fn seed_table(&self, chart_id: &str, table_number: i64, capacity: i32) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("floor_table");
        store.tables.insert(
            id.clone(),
            FloorTable {
                id: Some(id.clone()),
                chart_id: chart_id.to_string(),
                table_number,
                name: None,
                shape: shared::models::TableShape::Round,
                capacity,
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                notes: None,
            },
        );
        id
    }

    pub fn seed_guest(&self, wedding_id: &str, name: &str, table_number: Option<i64>) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("guest");
        store.guests.insert(
            id.clone(),
            Guest {
                id: Some(id.clone()),
                wedding_id: wedding_id.to_string(),
                name: name.to_string(),
                group_name: None,
                table_number,
                notes: None,
            },
        );
        id
    }

    /// Direct read of a stored guest, for asserting persisted state
    pub fn stored_guest(&self, guest_id: &str) -> Option<Guest> {
        self.store.lock().unwrap().guests.get(guest_id).cloned()
    }

    /// Direct read of a stored table
    pub fn stored_table(&self, table_id: &str) -> Option<FloorTable> {
        self.store.lock().unwrap().tables.get(table_id).cloned()
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn list_charts(&self, wedding_id: &str) -> GatewayResult<Vec<SeatingChart>> {
        let mut store = self.store.lock().unwrap();
        store.enter("list_charts")?;
        let mut charts: Vec<_> = store
            .charts
            .values()
            .filter(|c| c.wedding_id == wedding_id)
            .cloned()
            .collect();
        charts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(charts)
    }

    async fn create_chart(&self, data: SeatingChartCreate) -> GatewayResult<SeatingChart> {
        let mut store = self.store.lock().unwrap();
        store.enter("create_chart")?;
        let id = store.next_id("seating_chart");
        let chart = SeatingChart {
            id: Some(id.clone()),
            wedding_id: data.wedding_id,
            name: data.name,
            venue_name: data.venue_name,
            layout_data: None,
            is_active: true,
        };
        store.charts.insert(id, chart.clone());
        Ok(chart)
    }

    async fn delete_chart(&self, chart_id: &str) -> GatewayResult<()> {
        let mut store = self.store.lock().unwrap();
        store.enter("delete_chart")?;
        if store.charts.remove(chart_id).is_none() {
            return Err(GatewayError::NotFound(format!("chart {chart_id}")));
        }
        // cascade: a chart owns its tables
        store.tables.retain(|_, t| t.chart_id != chart_id);
        Ok(())
    }

    async fn list_tables(&self, chart_id: &str) -> GatewayResult<Vec<FloorTable>> {
        let mut store = self.store.lock().unwrap();
        store.enter("list_tables")?;
        let mut tables: Vec<_> = store
            .tables
            .values()
            .filter(|t| t.chart_id == chart_id)
            .cloned()
            .collect();
        tables.sort_by_key(|t| t.table_number);
        Ok(tables)
    }

    async fn create_table(&self, data: FloorTableCreate) -> GatewayResult<FloorTable> {
        let mut store = self.store.lock().unwrap();
        store.enter("create_table")?;
        let table_number = match data.table_number {
            Some(n) => n,
            None => {
                store
                    .tables
                    .values()
                    .filter(|t| t.chart_id == data.chart_id)
                    .map(|t| t.table_number)
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        };
        let duplicate = store
            .tables
            .values()
            .any(|t| t.chart_id == data.chart_id && t.table_number == table_number);
        if duplicate {
            return Err(GatewayError::Conflict(format!(
                "table number {table_number} already exists in this chart"
            )));
        }
        let id = store.next_id("floor_table");
        let table = FloorTable {
            id: Some(id.clone()),
            chart_id: data.chart_id,
            table_number,
            name: data.name,
            shape: data.shape,
            capacity: data.capacity,
            x: data.x,
            y: data.y,
            rotation: data.rotation,
            notes: data.notes,
        };
        store.tables.insert(id, table.clone());
        Ok(table)
    }

    async fn update_table_position(
        &self,
        table_id: &str,
        pos: TablePosition,
    ) -> GatewayResult<FloorTable> {
        let mut store = self.store.lock().unwrap();
        store.enter("update_table_position")?;
        let table = store
            .tables
            .get_mut(table_id)
            .ok_or_else(|| GatewayError::NotFound(format!("table {table_id}")))?;
        table.x = pos.x;
        table.y = pos.y;
        Ok(table.clone())
    }

    async fn delete_table(&self, table_id: &str) -> GatewayResult<()> {
        let mut store = self.store.lock().unwrap();
        store.enter("delete_table")?;
        if store.tables.remove(table_id).is_none() {
            return Err(GatewayError::NotFound(format!("table {table_id}")));
        }
        Ok(())
    }

    async fn list_guests(&self, wedding_id: &str) -> GatewayResult<Vec<Guest>> {
        let mut store = self.store.lock().unwrap();
        store.enter("list_guests")?;
        let mut guests: Vec<_> = store
            .guests
            .values()
            .filter(|g| g.wedding_id == wedding_id)
            .cloned()
            .collect();
        guests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(guests)
    }

    async fn update_guest_seat(
        &self,
        guest_id: &str,
        table_number: Option<i64>,
    ) -> GatewayResult<Guest> {
        let mut store = self.store.lock().unwrap();
        store.enter("update_guest_seat")?;
        let guest = store
            .guests
            .get_mut(guest_id)
            .ok_or_else(|| GatewayError::NotFound(format!("guest {guest_id}")))?;
        guest.table_number = table_number;
        Ok(guest.clone())
    }
}
