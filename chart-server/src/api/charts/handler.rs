//! Seating Chart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{FloorTableRepository, SeatingChartRepository};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{FloorTable, SeatingChart, SeatingChartCreate};

#[derive(Debug, Deserialize)]
pub struct ChartListQuery {
    pub wedding_id: String,
}

/// GET /api/charts?wedding_id= - 获取婚礼的所有座位图
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ChartListQuery>,
) -> AppResult<Json<Vec<SeatingChart>>> {
    let repo = SeatingChartRepository::new(state.db.clone());
    let charts = repo.find_by_wedding(&query.wedding_id).await?;
    Ok(Json(charts.into_iter().map(Into::into).collect()))
}

/// GET /api/charts/:id - 获取单个座位图
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SeatingChart>> {
    let repo = SeatingChartRepository::new(state.db.clone());
    let chart = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Seating chart {id} not found")))?;
    Ok(Json(chart.into()))
}

/// POST /api/charts - 创建座位图
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SeatingChartCreate>,
) -> AppResult<Json<SeatingChart>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.venue_name.as_deref(), "venue_name", MAX_NOTE_LEN)?;

    let repo = SeatingChartRepository::new(state.db.clone());
    let chart = repo.create(payload).await?;

    tracing::info!(chart = %chart.name, "seating chart created");
    Ok(Json(chart.into()))
}

/// DELETE /api/charts/:id - 删除座位图 (级联删除桌台)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = SeatingChartRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    tracing::info!(chart_id = %id, "seating chart deleted");
    Ok(Json(result))
}

/// GET /api/charts/:id/tables - 获取座位图内的所有桌台
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(chart_id): Path<String>,
) -> AppResult<Json<Vec<FloorTable>>> {
    let repo = FloorTableRepository::new(state.db.clone());
    let tables = repo.find_by_chart(&chart_id).await?;
    Ok(Json(tables.into_iter().map(Into::into).collect()))
}
