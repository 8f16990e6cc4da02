// ==========================================
// 品类相关处理函数
// ==========================================

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::common::{map_api_error, HttpError};
use crate::app::state::AppState;
use crate::domain::category::{Category, NewCategory};

/// 查询所有品类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, HttpError> {
    let categories = state
        .category_api
        .list_categories()
        .map_err(map_api_error)?;
    Ok(Json(categories))
}

/// 创建单个品类
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCategory>,
) -> Result<Json<Category>, HttpError> {
    let category = state
        .category_api
        .create_category(payload)
        .map_err(map_api_error)?;
    Ok(Json(category))
}
