// ==========================================
// 库存销售管理系统 - API 层
// ==========================================
// 职责: 面向传输层的业务操作,连接仓储与导入器
// ==========================================

pub mod category_api;
pub mod error;
pub mod product_api;
pub mod sale_api;

pub use category_api::CategoryApi;
pub use error::{ApiError, ApiResult};
pub use product_api::ProductApi;
pub use sale_api::SaleApi;
