// ==========================================
// 库存销售管理系统 - 进程配置
// ==========================================
// 职责: 从环境变量读取运行配置,缺省值面向本机开发
// ==========================================

use std::path::PathBuf;

/// 缺省监听地址（前端默认访问 8000 端口）
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// 进程配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库文件路径
    pub db_path: String,

    /// HTTP 监听地址
    pub listen_addr: String,

    /// 种子文件目录（categories.csv / products.csv / sales.csv）
    pub seed_dir: PathBuf,
}

impl AppConfig {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    /// - INVENTORY_SALES_DB_PATH: 数据库路径（缺省见 default_db_path）
    /// - INVENTORY_SALES_LISTEN_ADDR: 监听地址（缺省 0.0.0.0:8000）
    /// - INVENTORY_SALES_SEED_DIR: 种子文件目录（缺省当前工作目录）
    pub fn from_env() -> Self {
        let db_path = std::env::var("INVENTORY_SALES_DB_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(default_db_path);

        let listen_addr = std::env::var("INVENTORY_SALES_LISTEN_ADDR")
            .ok()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let seed_dir = std::env::var("INVENTORY_SALES_SEED_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            db_path,
            listen_addr,
            seed_dir,
        }
    }
}

/// 缺省数据库路径
///
/// 使用用户数据目录,避免开发期 DB 文件散落在工作目录。
/// 先给一个默认回退值，后续如果能拿到 data_dir 再覆盖。
pub fn default_db_path() -> String {
    let mut path = PathBuf::from("./inventory_sales.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("inventory-sales-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("inventory-sales");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("inventory_sales.db");
    }

    path.to_string_lossy().to_string()
}
