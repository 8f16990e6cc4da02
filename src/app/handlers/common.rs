// ==========================================
// 公共工具：错误映射、日期解析
// ==========================================

use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::importer::error::ImportError;

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// HTTP 错误类型别名（状态码 + JSON 错误体）
pub type HttpError = (StatusCode, Json<ErrorResponse>);

/// 将ApiError转换为 HTTP 响应（状态码 + 错误码 + 消息）
pub fn map_api_error(err: ApiError) -> HttpError {
    let (status, code, details) = match &err {
        ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", None),
        ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", None),

        // 导入错误：客户端错误逐类编码,存储失败归为服务端错误
        ApiError::Import(import_err) => match import_err {
            ImportError::InvalidFileKind(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_FILE_KIND", None)
            }
            ImportError::InvalidEncoding(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_ENCODING", None)
            }
            ImportError::CsvParseError(_) => (StatusCode::BAD_REQUEST, "CSV_PARSE_ERROR", None),
            ImportError::InvalidSchema { required } => (
                StatusCode::BAD_REQUEST,
                "INVALID_SCHEMA",
                Some(serde_json::json!({ "required_fields": required })),
            ),
            ImportError::InvalidRowValue { row, field, .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_ROW_VALUE",
                Some(serde_json::json!({ "row": row, "field": field })),
            ),
            ImportError::StorageError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", None)
            }
            ImportError::InternalError(_) | ImportError::Other(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None)
            }
        },

        ApiError::DatabaseError(_)
        | ApiError::DatabaseConnectionError(_)
        | ApiError::DatabaseTransactionError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", None)
        }
        ApiError::InternalError(_) | ApiError::Other(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None)
        }
    };

    (
        status,
        Json(ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
            details,
        }),
    )
}

/// 解析日期字符串（YYYY-MM-DD）
pub fn parse_date(date_str: &str) -> Result<NaiveDate, HttpError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        map_api_error(ApiError::InvalidInput(format!(
            "日期格式错误（应为YYYY-MM-DD）: {}",
            e
        )))
    })
}
