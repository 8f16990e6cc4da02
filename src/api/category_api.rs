// ==========================================
// 库存销售管理系统 - 品类 API
// ==========================================
// 职责: 品类查询与创建（只增不改）
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::category::{Category, NewCategory};
use crate::repository::category_repo::CategoryRepository;

pub struct CategoryApi {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryApi {
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// 查询所有品类
    pub fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let categories = self.category_repo.list_all()?;
        Ok(categories)
    }

    /// 创建单个品类
    pub fn create_category(&self, new: NewCategory) -> ApiResult<Category> {
        let category = self.category_repo.insert(new)?;
        Ok(category)
    }
}
