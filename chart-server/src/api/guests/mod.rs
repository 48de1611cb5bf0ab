//! Guest Seat API 模块
//!
//! Guest lifecycle belongs to the guest-list feature; this surface
//! exposes the list, a create used by that feature, and the single seat
//! field the seating engine writes.

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/guests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/seat", put(handler::update_seat))
}
