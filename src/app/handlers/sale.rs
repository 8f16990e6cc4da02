// ==========================================
// 销售记录相关处理函数
// ==========================================

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::common::{map_api_error, parse_date, HttpError};
use crate::app::state::AppState;
use crate::domain::sale::{NewSale, Sale};

/// 销售记录查询参数（可选日期区间,边界含端点）
#[derive(Debug, Clone, Deserialize)]
pub struct SalesQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// 销售额汇总响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: f64,
}

/// 查询销售记录（start/end 为空串时视同未传）
pub async fn list_sales(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<Vec<Sale>>, HttpError> {
    let start = match query.start.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let end = match query.end.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };

    let sales = state
        .sale_api
        .list_sales(start, end)
        .map_err(map_api_error)?;
    Ok(Json(sales))
}

/// 创建单条销售记录
pub async fn create_sale(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewSale>,
) -> Result<Json<Sale>, HttpError> {
    let sale = state.sale_api.create_sale(payload).map_err(map_api_error)?;
    Ok(Json(sale))
}

/// 全量销售额汇总
pub async fn total_sales(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TotalResponse>, HttpError> {
    let total = state.sale_api.total_sales().map_err(map_api_error)?;
    Ok(Json(TotalResponse { total }))
}
