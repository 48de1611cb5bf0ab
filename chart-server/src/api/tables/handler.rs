//! Floor Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::FloorTableRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};
use shared::models::{FloorTable, FloorTableCreate, TablePosition};

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<FloorTable>> {
    let repo = FloorTableRepository::new(state.db.clone());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {id} not found")))?;
    Ok(Json(table.into()))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FloorTableCreate>,
) -> AppResult<Json<FloorTable>> {
    validate_optional_text(payload.name.as_deref(), "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.notes.as_deref(), "notes", MAX_NOTE_LEN)?;

    let repo = FloorTableRepository::new(state.db.clone());
    let table = repo.create(payload).await?;

    tracing::info!(table_number = table.table_number, "floor table created");
    Ok(Json(table.into()))
}

/// PUT /api/tables/:id/position - 更新桌台位置 (拖拽释放)
pub async fn update_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TablePosition>,
) -> AppResult<Json<FloorTable>> {
    let repo = FloorTableRepository::new(state.db.clone());
    let table = repo.update_position(&id, payload).await?;
    Ok(Json(table.into()))
}

/// DELETE /api/tables/:id - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FloorTableRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    tracing::info!(table_id = %id, "floor table deleted");
    Ok(Json(result))
}
