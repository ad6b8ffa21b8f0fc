//! Dashboard API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/dashboard | GET | 汇总指标 |
//! | /api/dashboard/sales | GET | 月度销售序列 |
//! | /api/dashboard/categories | GET | 分类销售 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::summary))
        .route("/sales", get(handler::sales))
        .route("/categories", get(handler::categories))
}
