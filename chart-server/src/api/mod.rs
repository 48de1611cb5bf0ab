//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`charts`] - 座位图管理接口
//! - [`tables`] - 桌台管理接口
//! - [`guests`] - 宾客席位接口

pub mod convert;

pub mod charts;
pub mod guests;
pub mod health;
pub mod tables;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(charts::router())
        .merge(tables::router())
        .merge(guests::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
