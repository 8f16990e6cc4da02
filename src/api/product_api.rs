// ==========================================
// 库存销售管理系统 - 商品 API
// ==========================================
// 职责: 商品查询、创建、整体替换、删除、批量导入
// 红线: 创建/替换不做跨字段校验（价格符号、品类存在性均不检查,
//       与现状保持一致）
// ==========================================

use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiResult;
use crate::domain::product::{NewProduct, Product};
use crate::importer::product_importer::ProductImporter;
use crate::repository::product_repo::ProductRepository;

/// 商品API
///
/// 职责：
/// 1. 商品查询与单条 CRUD
/// 2. CSV 批量导入（委托导入器,全量成功或全量失败）
pub struct ProductApi {
    product_repo: Arc<ProductRepository>,
    importer: Arc<dyn ProductImporter>,
}

impl ProductApi {
    /// 创建新的ProductApi实例
    ///
    /// # 参数
    /// - product_repo: 商品仓储
    /// - importer: 商品批量导入器
    pub fn new(product_repo: Arc<ProductRepository>, importer: Arc<dyn ProductImporter>) -> Self {
        Self {
            product_repo,
            importer,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询所有商品
    pub fn list_products(&self) -> ApiResult<Vec<Product>> {
        let products = self.product_repo.list_all()?;
        Ok(products)
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 创建单个商品
    ///
    /// # 返回
    /// - Ok(Product): 含数据库分配ID的完整记录
    pub fn create_product(&self, new: NewProduct) -> ApiResult<Product> {
        let product = self.product_repo.insert(new)?;
        info!(product_id = product.id, "商品创建成功");
        Ok(product)
    }

    /// 按ID整体替换商品
    ///
    /// # 返回
    /// - Err(NotFound): 目标记录不存在
    pub fn update_product(&self, id: i64, new: NewProduct) -> ApiResult<Product> {
        let product = self.product_repo.update(id, new)?;
        info!(product_id = id, "商品替换成功");
        Ok(product)
    }

    /// 按ID删除商品
    ///
    /// # 返回
    /// - Err(NotFound): 目标记录不存在
    pub fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.product_repo.delete(id)?;
        info!(product_id = id, "商品删除成功");
        Ok(())
    }

    /// 批量导入商品（上传 CSV）
    ///
    /// # 参数
    /// - file_name: 上传文件名
    /// - content: 原始文件字节
    ///
    /// # 返回
    /// - Ok(Vec<Product>): 已落库并回填ID的记录（文件顺序）
    /// - Err(ApiError): 任一校验或提交失败,数据库保持不变
    pub async fn upload_products(&self, file_name: &str, content: &[u8]) -> ApiResult<Vec<Product>> {
        let created = self.importer.import_csv(file_name, content).await?;
        Ok(created)
    }
}
