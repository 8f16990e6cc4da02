// ==========================================
// 库存销售管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
///
/// 客户端错误（文件/结构/行值）与存储错误分开建模,
/// HTTP 层据此映射 400 / 500
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    InvalidFileKind(String),

    #[error("文件编码错误: {0}（要求 UTF-8 文本）")]
    InvalidEncoding(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 结构与行值错误 =====
    #[error("CSV 结构无效,必需字段集: {required}")]
    InvalidSchema { required: String },

    #[error("行 {row} 字段值无效 (字段 {field}): {message}")]
    InvalidRowValue {
        row: usize,
        field: String,
        message: String,
    },

    // ===== 数据库错误 =====
    #[error("批量提交失败: {0}")]
    StorageError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<RepositoryError>（提交阶段的存储失败）
impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        ImportError::StorageError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
