//! Shop API Handlers

use axum::{Json, extract::State};
use shared::models::{
    AreaOption, MapMarker, MapView, RegenerateShops, Shop, ShopBatchInfo, ShopListItem,
    ShopListResponse,
};

use crate::api::extract::{ApiPath, ApiQuery, OptionalJson};
use crate::core::ServerState;
use crate::search::{ShopQuery, area_options};
use crate::utils::{ApiResponse, AppError, AppResult};

/// 地图默认中心 (达卡市中心) 与缩放级别
pub const MAP_CENTER: [f64; 2] = [23.7805, 90.3900];
pub const MAP_ZOOM: u8 = 12;

/// GET /api/shops - 按搜索词和区域筛选
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ShopQuery>,
) -> AppResult<Json<ApiResponse<ShopListResponse>>> {
    let batch = state.shops.current();
    let filter = query.to_filter();

    let items: Vec<ShopListItem> = filter
        .apply(&batch.shops)
        .cloned()
        .map(ShopListItem::from)
        .collect();

    tracing::debug!(q = %query.q, area = %query.area, matched = items.len(), "Shops filtered");

    Ok(Json(ApiResponse::success(ShopListResponse {
        total: items.len(),
        batch_size: batch.len(),
        generated_at: batch.generated_at,
        items,
    })))
}

/// GET /api/shops/areas - 区域下拉选项 (all + 去重排序后的区域)
pub async fn areas(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<AreaOption>>>> {
    let options = area_options(state.shops.catalog().areas.iter().copied());
    Ok(Json(ApiResponse::success(options)))
}

/// GET /api/shops/map - 地图视图，每个可见店铺一个标记
pub async fn map(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ShopQuery>,
) -> AppResult<Json<ApiResponse<MapView>>> {
    let batch = state.shops.current();
    let filter = query.to_filter();

    let markers = filter.apply(&batch.shops).map(MapMarker::from).collect();

    Ok(Json(ApiResponse::success(MapView {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        bounds: state.shops.catalog().bounds,
        markers,
    })))
}

/// GET /api/shops/{id} - 获取当前批次中的单个店铺
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<u32>,
) -> AppResult<Json<ApiResponse<Shop>>> {
    let shop = state
        .shops
        .find(id)
        .ok_or_else(|| AppError::shop_not_found(id))?;
    Ok(Json(ApiResponse::success(shop)))
}

/// POST /api/shops/regenerate - 丢弃当前批次并生成新批次
///
/// 请求体可省略。`count` 缺省时使用配置的批次大小；小于等于 0 时生成空批次。
pub async fn regenerate(
    State(state): State<ServerState>,
    OptionalJson(payload): OptionalJson<RegenerateShops>,
) -> AppResult<Json<ApiResponse<ShopBatchInfo>>> {
    let count = resolve_count(
        payload.count,
        state.config.shop_batch_size,
        state.config.shop_max_batch,
    )?;

    let batch = state.shops.regenerate(count);

    Ok(Json(ApiResponse::success(ShopBatchInfo {
        batch_size: batch.len(),
        generated_at: batch.generated_at,
    })))
}

/// 解析请求的批次大小
fn resolve_count(requested: Option<i64>, default: usize, max: usize) -> AppResult<usize> {
    let count = match requested {
        None => default,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    };
    if count > max {
        return Err(AppError::batch_too_large(count, max));
    }
    Ok(count)
}
