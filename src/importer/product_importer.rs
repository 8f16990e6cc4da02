// ==========================================
// 库存销售管理系统 - 商品批量导入器
// ==========================================
// 职责: 整合导入流程,从上传文件到数据库
// 流程: 扩展名检查 → 解码 → 解析 → 逐行校验暂存 → 原子提交 → 回填ID
// 红线: 全量暂存、一次提交——任一行失败则整批不落库,
//       提交前读者不可见任何记录
// ==========================================

use crate::domain::product::{NewProduct, Product};
use crate::importer::csv_reader::CsvReader;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_mapper::RowMapper;
use crate::repository::product_repo::ProductRepository;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// ProductImporter - 导入器接口
// ==========================================
/// 商品批量导入器接口
#[async_trait::async_trait]
pub trait ProductImporter: Send + Sync {
    /// 导入一个上传的 CSV 文件
    ///
    /// # 参数
    /// - file_name: 上传文件名（用于扩展名检查）
    /// - content: 原始文件字节
    ///
    /// # 返回
    /// - Ok(Vec<Product>): 已落库并回填ID的记录（文件顺序）
    /// - Err(ImportError): 任一校验或提交失败,数据库保持不变
    async fn import_csv(&self, file_name: &str, content: &[u8]) -> ImportResult<Vec<Product>>;
}

// ==========================================
// CsvProductImporter - 导入器实现
// ==========================================
pub struct CsvProductImporter {
    product_repo: Arc<ProductRepository>,
    reader: CsvReader,
    mapper: RowMapper,
}

impl CsvProductImporter {
    /// 创建新的导入器实例
    ///
    /// # 参数
    /// - product_repo: 商品仓储（批量提交目标）
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self {
            product_repo,
            reader: CsvReader,
            mapper: RowMapper,
        }
    }

    /// 扩展名检查（读取内容之前执行）
    fn check_file_kind(file_name: &str) -> ImportResult<()> {
        match Path::new(file_name).extension() {
            Some(ext) if ext == "csv" => Ok(()),
            Some(ext) => Err(ImportError::InvalidFileKind(
                ext.to_string_lossy().to_string(),
            )),
            None => Err(ImportError::InvalidFileKind(file_name.to_string())),
        }
    }
}

#[async_trait::async_trait]
impl ProductImporter for CsvProductImporter {
    #[instrument(skip(self, content))]
    async fn import_csv(&self, file_name: &str, content: &[u8]) -> ImportResult<Vec<Product>> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        info!(batch_id = %batch_id, "开始导入商品数据");

        // === 步骤 1: 扩展名检查（先于内容读取）===
        Self::check_file_kind(file_name).map_err(|e| {
            error!(batch_id = %batch_id, error = %e, "文件类型检查失败");
            e
        })?;

        // === 步骤 2: 解码 ===
        debug!("步骤 2: 解码 UTF-8");
        let text = std::str::from_utf8(content)
            .map_err(|e| ImportError::InvalidEncoding(e.to_string()))?;

        // === 步骤 3: 解析 ===
        debug!("步骤 3: 解析 CSV");
        let rows = self.reader.parse_str(text)?;
        let total_rows = rows.len();
        info!(batch_id = %batch_id, total_rows = total_rows, "文件解析完成");

        // === 步骤 4: 逐行校验并暂存 ===
        // 严格按文件顺序,任一行失败立即中止（此时尚未提交,库不变）
        debug!("步骤 4: 逐行校验暂存");
        let mut staged: Vec<NewProduct> = Vec::with_capacity(total_rows);
        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1;
            let record = self.mapper.map_row(row, row_number).map_err(|e| {
                error!(batch_id = %batch_id, row_number = row_number, error = %e, "行校验失败,整批中止");
                e
            })?;
            staged.push(record);
        }
        debug!(staged = staged.len(), "暂存完成");

        // === 步骤 5: 原子提交 ===
        debug!("步骤 5: 批量提交");
        let created = self.product_repo.batch_insert(staged)?;

        info!(
            batch_id = %batch_id,
            total = total_rows,
            created = created.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "商品数据导入完成"
        );

        Ok(created)
    }
}
