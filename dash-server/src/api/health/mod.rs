//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 详细健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "uptime_seconds": 42,
//!   "shop_count": 200
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// 简单健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    pub status: String,
    pub version: String,
    pub environment: String,
    /// 运行时间 (秒)
    pub uptime_seconds: u64,
    /// 当前批次的店铺数量
    pub shop_count: usize,
}

/// 详细健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub version: String,
    /// 运行时间 (秒)
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    /// 店铺批次
    pub shops: CheckResult,
    /// 静态看板数据
    pub dashboard: CheckResult,
}

/// 单项检查结果
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    /// 状态 (ok | empty)
    pub status: String,
    /// 记录数
    pub count: usize,
}

impl CheckResult {
    fn from_count(count: usize) -> Self {
        Self {
            status: if count > 0 { "ok" } else { "empty" }.to_string(),
            count,
        }
    }
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        uptime_seconds: state.uptime_seconds(),
        shop_count: state.shops.current().len(),
    })
}

/// 包含数据状态的详细健康检查
///
/// 空批次 (count=0 重新生成后) 是合法状态，只标记为 degraded
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let shops = CheckResult::from_count(state.shops.current().len());
    let dashboard = CheckResult::from_count(
        state.dashboard.vendors.len() + state.dashboard.inventory.len(),
    );

    let all_ok = shops.status == "ok" && dashboard.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        checks: HealthChecks { shops, dashboard },
    })
}
