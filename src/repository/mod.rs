// ==========================================
// 库存销售管理系统 - 数据仓储层
// ==========================================
// 职责: 数据访问,不含业务逻辑
// 约定: 所有仓储共享同一个 Arc<Mutex<Connection>>,
//       每次操作获取锁、结束即释放（所有退出路径统一）
// ==========================================

pub mod category_repo;
pub mod error;
pub mod product_repo;
pub mod sale_repo;

pub use category_repo::CategoryRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use product_repo::ProductRepository;
pub use sale_repo::SaleRepository;
