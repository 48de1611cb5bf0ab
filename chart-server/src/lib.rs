//! Chart Server - persistence service for wedding seating charts
//!
//! # Architecture overview
//!
//! This is the storage boundary the seating engine talks to. It owns the
//! chart and table records, holds the wedding's guest rows on behalf of
//! the guest-list feature, and exposes RESTful CRUD over them:
//!
//! - **Database** (`db`): embedded SurrealDB storage, repository per entity
//! - **HTTP API** (`api`): axum routers nested under `/api`
//! - **Core** (`core`): configuration and server state
//!
//! # Module structure
//!
//! ```text
//! chart-server/src/
//! ├── core/          # 配置、状态
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repositories)
//! └── utils/         # 错误、日志
//! ```
//!
//! The server deliberately enforces only what it owns: record shape,
//! table-number uniqueness per chart, not-found. Seat capacity is the
//! engine's check; the guest store accepts any seat write, like the
//! external guest system it stands in for.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, ServerState};
pub use crate::utils::{AppError, AppResult};
