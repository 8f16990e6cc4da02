// ==========================================
// 库存销售管理系统 - 销售记录领域模型
// ==========================================
// 对齐: sales 表
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Sale - 销售记录
// ==========================================
/// 销售记录（只增不改：当前接口面无更新/删除操作）
///
/// 红线: total_price 不与 quantity × 单价 做交叉校验,按调用方传入值落库
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,          // 销售记录ID（数据库分配）
    pub product_id: i64,  // 商品引用（不强制存在）
    pub quantity: i64,    // 数量（未做正数校验）
    pub total_price: f64, // 成交总额
    pub date: NaiveDate,  // 销售日期（ISO DATE）
}

// ==========================================
// NewSale - 销售记录创建载荷
// ==========================================
/// 销售记录创建载荷（ID 由数据库分配）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: i64,
    pub quantity: i64,
    pub total_price: f64,
    pub date: NaiveDate,
}

impl Sale {
    /// 用数据库分配的ID补全载荷
    pub fn from_new(id: i64, new: NewSale) -> Self {
        Self {
            id,
            product_id: new.product_id,
            quantity: new.quantity,
            total_price: new.total_price,
            date: new.date,
        }
    }
}
