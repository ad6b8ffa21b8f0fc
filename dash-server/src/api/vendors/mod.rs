//! Vendor API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/vendors | GET | 供应商列表 |
//! | /api/vendors/{id} | GET | 单个供应商 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/vendors", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
