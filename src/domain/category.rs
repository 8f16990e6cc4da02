// ==========================================
// 库存销售管理系统 - 品类领域模型
// ==========================================
// 对齐: categories 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Category - 商品品类
// ==========================================
/// 商品品类（只增不改：当前接口面无更新/删除操作）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,      // 品类ID（数据库分配）
    pub name: String, // 品类名称
}

// ==========================================
// NewCategory - 品类创建载荷
// ==========================================
/// 品类创建载荷（ID 由数据库分配）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl Category {
    /// 用数据库分配的ID补全载荷
    pub fn from_new(id: i64, new: NewCategory) -> Self {
        Self { id, name: new.name }
    }
}
