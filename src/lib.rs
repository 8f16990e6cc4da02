// ==========================================
// 库存销售管理系统 - 核心库
// ==========================================
// 技术栈: axum + Rust + SQLite
// 系统定位: 库存与销售管理后端服务
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与载荷
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 进程配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// 种子数据装载
pub mod seed;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{Category, NewCategory, NewProduct, NewSale, Product, Sale};

// API
pub use api::{CategoryApi, ProductApi, SaleApi};

// 应用
pub use app::{build_router, AppState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存销售管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
