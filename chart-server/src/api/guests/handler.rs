//! Guest Seat API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::GuestRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use shared::models::{Guest, GuestCreate, GuestSeatUpdate};

#[derive(Debug, Deserialize)]
pub struct GuestListQuery {
    pub wedding_id: String,
}

/// GET /api/guests?wedding_id= - 获取婚礼的所有宾客
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GuestListQuery>,
) -> AppResult<Json<Vec<Guest>>> {
    let repo = GuestRepository::new(state.db.clone());
    let guests = repo.find_by_wedding(&query.wedding_id).await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}

/// POST /api/guests - 创建宾客 (guest-list 功能使用)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = GuestRepository::new(state.db.clone());
    let guest = repo.create(payload).await?;
    Ok(Json(guest.into()))
}

/// PUT /api/guests/:id/seat - 更新宾客席位
///
/// The one guest field the seating engine may write. Capacity is checked
/// by the engine before this call is made; the store accepts any number.
pub async fn update_seat(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GuestSeatUpdate>,
) -> AppResult<Json<Guest>> {
    let repo = GuestRepository::new(state.db.clone());
    let guest = repo.update_seat(&id, payload.table_number).await?;

    tracing::info!(guest_id = %id, table_number = ?payload.table_number, "guest seat updated");
    Ok(Json(guest.into()))
}
