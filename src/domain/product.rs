// ==========================================
// 库存销售管理系统 - 商品领域模型
// ==========================================
// 用途: 单条创建接口与批量导入共用同一载荷类型
// 对齐: products 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - 商品主数据
// ==========================================
/// 商品主数据
///
/// 红线: category_id 仅作引用,写入时不校验品类是否存在
/// （悬挂引用按现状保留,引用完整性是显式扩展点）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,             // 商品ID（数据库分配）
    pub name: String,        // 商品名称
    pub description: String, // 商品描述（允许为空串）
    pub price: f64,          // 单价
    pub brand: String,       // 品牌
    pub category_id: i64,    // 品类引用（不强制存在）
}

// ==========================================
// NewProduct - 商品创建载荷
// ==========================================
/// 商品创建载荷（ID 由数据库分配）
///
/// 生命周期: 单条创建请求体 / 批量导入的暂存记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String, // 缺省为空串
    pub price: f64,
    pub brand: String,
    pub category_id: i64,
}

impl Product {
    /// 用数据库分配的ID补全载荷（导入提交后的"回填"步骤）
    pub fn from_new(id: i64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            brand: new.brand,
            category_id: new.category_id,
        }
    }
}
