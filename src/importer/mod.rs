// ==========================================
// 库存销售管理系统 - 导入层
// ==========================================
// 职责: CSV 批量导入 + 字段校验 + 批量落库
// 红线: 不含HTTP逻辑,只负责数据处理
// 流程: 扩展名检查 → 解码 → 解析 → 逐行校验暂存 → 原子提交 → 回填ID
// ==========================================

pub mod csv_reader;
pub mod error;
pub mod product_importer;
pub mod row_mapper;

pub use csv_reader::CsvReader;
pub use error::{ImportError, ImportResult};
pub use product_importer::{CsvProductImporter, ProductImporter};
pub use row_mapper::{RowMapper, REQUIRED_FIELDS};
