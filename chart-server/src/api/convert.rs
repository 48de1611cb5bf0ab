//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use shared::models as api;

// ============ Helper ============

pub fn record_id_to_string(id: &surrealdb::RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<surrealdb::RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

// ============ SeatingChart ============

impl From<db::SeatingChart> for api::SeatingChart {
    fn from(c: db::SeatingChart) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            wedding_id: c.wedding_id,
            name: c.name,
            venue_name: c.venue_name,
            layout_data: c.layout_data,
            is_active: c.is_active,
        }
    }
}

// ============ FloorTable ============

impl From<db::FloorTable> for api::FloorTable {
    fn from(t: db::FloorTable) -> Self {
        Self {
            id: option_record_id_to_string(&t.id),
            chart_id: record_id_to_string(&t.chart),
            table_number: t.table_number,
            name: t.name,
            shape: t.shape,
            capacity: t.capacity,
            x: t.x,
            y: t.y,
            rotation: t.rotation,
            notes: t.notes,
        }
    }
}

// ============ Guest ============

impl From<db::Guest> for api::Guest {
    fn from(g: db::Guest) -> Self {
        Self {
            id: option_record_id_to_string(&g.id),
            wedding_id: g.wedding_id,
            name: g.name,
            group_name: g.group_name,
            table_number: g.table_number,
            notes: g.notes,
        }
    }
}
