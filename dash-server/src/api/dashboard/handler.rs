//! Dashboard API Handlers

use axum::{Json, extract::State};
use shared::models::{AnalyticsSummary, CategorySales, SalesData};

use crate::core::ServerState;
use crate::dashboard::analytics_summary;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/dashboard
pub async fn summary(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<AnalyticsSummary>>> {
    Ok(Json(ApiResponse::success(analytics_summary(&state.dashboard))))
}

/// GET /api/dashboard/sales
pub async fn sales(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<SalesData>>>> {
    Ok(Json(ApiResponse::success(state.dashboard.sales.clone())))
}

/// GET /api/dashboard/categories
pub async fn categories(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<CategorySales>>>> {
    Ok(Json(ApiResponse::success(state.dashboard.categories.clone())))
}
