// ==========================================
// 库存销售管理系统 - 销售记录 API
// ==========================================
// 职责: 销售记录查询（可选日期区间）、创建、全量汇总
// 红线: 创建不校验 product_id 存在性与 quantity 符号
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::error::ApiResult;
use crate::domain::sale::{NewSale, Sale};
use crate::repository::sale_repo::SaleRepository;

pub struct SaleApi {
    sale_repo: Arc<SaleRepository>,
}

impl SaleApi {
    pub fn new(sale_repo: Arc<SaleRepository>) -> Self {
        Self { sale_repo }
    }

    /// 查询销售记录（可选日期区间,边界含端点）
    pub fn list_sales(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<Sale>> {
        let sales = self.sale_repo.list(start, end)?;
        Ok(sales)
    }

    /// 创建单条销售记录
    pub fn create_sale(&self, new: NewSale) -> ApiResult<Sale> {
        let sale = self.sale_repo.insert(new)?;
        Ok(sale)
    }

    /// 全量销售额汇总（空表为 0）
    pub fn total_sales(&self) -> ApiResult<f64> {
        let total = self.sale_repo.total_sales()?;
        Ok(total)
    }
}
