//! Inventory API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/inventory | GET | 库存列表 |
//! | /api/inventory/low-stock | GET | 低库存预警 |
//! | /api/inventory/{id} | GET | 单个库存项 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/low-stock", get(handler::low_stock))
        .route("/{id}", get(handler::get_by_id))
}
