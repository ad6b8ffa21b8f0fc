//! Shop API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/shops | GET | 按搜索词/区域筛选店铺 (`?q=&area=`) |
//! | /api/shops/areas | GET | 区域下拉选项 |
//! | /api/shops/map | GET | 地图视图 (标记 + 弹窗) |
//! | /api/shops/regenerate | POST | 重新生成店铺批次 |
//! | /api/shops/{id} | GET | 单个店铺 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shops", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/areas", get(handler::areas))
        .route("/map", get(handler::map))
        .route("/regenerate", post(handler::regenerate))
        .route("/{id}", get(handler::get_by_id))
}
