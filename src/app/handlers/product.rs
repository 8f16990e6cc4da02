// ==========================================
// 商品相关处理函数
// ==========================================

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::common::{map_api_error, HttpError};
use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::product::{NewProduct, Product};

/// 删除结果响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// 查询所有商品
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, HttpError> {
    let products = state.product_api.list_products().map_err(map_api_error)?;
    Ok(Json(products))
}

/// 创建单个商品
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>, HttpError> {
    let product = state
        .product_api
        .create_product(payload)
        .map_err(map_api_error)?;
    Ok(Json(product))
}

/// 按ID整体替换商品
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>, HttpError> {
    let product = state
        .product_api
        .update_product(id, payload)
        .map_err(map_api_error)?;
    Ok(Json(product))
}

/// 按ID删除商品
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    state.product_api.delete_product(id).map_err(map_api_error)?;
    Ok(Json(DeleteResponse {
        message: "商品删除成功".to_string(),
    }))
}

/// 批量导入商品（multipart 上传,字段名 file）
///
/// # 返回
/// - 成功: 已落库并回填ID的记录（文件顺序）
/// - 失败: 错误响应,数据库保持不变
pub async fn upload_products(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Vec<Product>>, HttpError> {
    // 取出名为 file 的上传字段
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| map_api_error(ApiError::InvalidInput(format!("multipart 解析失败: {}", e))))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(|e| {
                map_api_error(ApiError::InvalidInput(format!("读取上传内容失败: {}", e)))
            })?;
            upload = Some((file_name, data.to_vec()));
            break;
        }
    }

    let (file_name, data) = upload.ok_or_else(|| {
        map_api_error(ApiError::InvalidInput("缺少上传字段: file".to_string()))
    })?;

    let created = state
        .product_api
        .upload_products(&file_name, &data)
        .await
        .map_err(map_api_error)?;

    Ok(Json(created))
}
