//! Inventory API Handlers

use axum::{Json, extract::State};
use shared::models::{InventoryItem, LowStockAlert};

use crate::api::extract::ApiPath;
use crate::core::ServerState;
use crate::dashboard::low_stock_alerts;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/inventory
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<InventoryItem>>>> {
    Ok(Json(ApiResponse::success(state.dashboard.inventory.clone())))
}

/// GET /api/inventory/low-stock - 库存低于阈值的项目
pub async fn low_stock(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<LowStockAlert>>>> {
    let alerts = low_stock_alerts(&state.dashboard.inventory);
    if !alerts.is_empty() {
        tracing::warn!(count = alerts.len(), "Inventory items below threshold");
    }
    Ok(Json(ApiResponse::success(alerts)))
}

/// GET /api/inventory/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<InventoryItem>>> {
    let item = state
        .dashboard
        .inventory
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| AppError::inventory_item_not_found(&id))?;
    Ok(Json(ApiResponse::success(item)))
}
