// ==========================================
// 库存销售管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 所有仓储共享同一个 Arc<Mutex<Connection>>,
//       不使用进程级全局连接（显式注入,便于测试）
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{CategoryApi, ProductApi, SaleApi};
use crate::db;
use crate::importer::product_importer::CsvProductImporter;
use crate::repository::{CategoryRepository, ProductRepository, SaleRepository};

/// 应用状态
///
/// 包含所有API实例和共享资源,作为 axum Router 的全局状态
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 商品API
    pub product_api: Arc<ProductApi>,

    /// 品类API
    pub category_api: Arc<CategoryApi>,

    /// 销售记录API
    pub sale_api: Arc<SaleApi>,

    /// 商品仓储（种子装载与测试对账用）
    pub product_repo: Arc<ProductRepository>,

    /// 品类仓储（种子装载用）
    pub category_repo: Arc<CategoryRepository>,

    /// 销售记录仓储（种子装载用）
    pub sale_repo: Arc<SaleRepository>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开数据库连接（统一 PRAGMA）并初始化 schema
    /// 2. 初始化所有Repository
    /// 3. 创建导入器与所有API实例
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 创建数据库连接（共享连接）
        let conn = db::open_sqlite_connection(db_path)?;
        db::init_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let product_repo = Arc::new(ProductRepository::from_connection(conn.clone()));
        let category_repo = Arc::new(CategoryRepository::from_connection(conn.clone()));
        let sale_repo = Arc::new(SaleRepository::from_connection(conn.clone()));

        // ==========================================
        // 初始化导入器与API层
        // ==========================================
        let importer = Arc::new(CsvProductImporter::new(product_repo.clone()));

        let product_api = Arc::new(ProductApi::new(product_repo.clone(), importer));
        let category_api = Arc::new(CategoryApi::new(category_repo.clone()));
        let sale_api = Arc::new(SaleApi::new(sale_repo.clone()));

        tracing::info!("AppState初始化成功");

        Ok(Self {
            db_path: db_path.to_string(),
            product_api,
            category_api,
            sale_api,
            product_repo,
            category_repo,
            sale_repo,
        })
    }
}
