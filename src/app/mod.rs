// ==========================================
// 库存销售管理系统 - 应用层
// ==========================================
// 职责: HTTP 集成,连接传输层与 API 层
// ==========================================

pub mod handlers;
pub mod routes;
pub mod state;

// 重导出
pub use routes::build_router;
pub use state::AppState;
