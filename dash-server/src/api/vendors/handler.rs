//! Vendor API Handlers

use axum::{Json, extract::State};
use shared::models::Vendor;

use crate::api::extract::ApiPath;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/vendors
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Vendor>>>> {
    Ok(Json(ApiResponse::success(state.dashboard.vendors.clone())))
}

/// GET /api/vendors/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Vendor>>> {
    let vendor = state
        .dashboard
        .vendors
        .iter()
        .find(|vendor| vendor.id == id)
        .cloned()
        .ok_or_else(|| AppError::vendor_not_found(&id))?;
    Ok(Json(ApiResponse::success(vendor)))
}
