// ==========================================
// 库存销售管理系统 - 行映射器
// ==========================================
// 职责: 键值行 → 商品创建载荷（必需字段检查 + 类型转换）
// 说明: 必需字段集对"每一行"判定,而非仅判定表头
//       （短行键集缺失同样中止整批导入,行为保持与现状一致）
// ==========================================

use crate::domain::product::NewProduct;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

/// 必需字段集
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "brand", "price", "category_id", "description"];

pub struct RowMapper;

impl RowMapper {
    /// 映射单行为商品创建载荷
    ///
    /// # 参数
    /// - row: 键值行（表头为键）
    /// - row_number: 数据行号（1起算,用于错误报告）
    ///
    /// # 返回
    /// - Ok(NewProduct): 已校验的暂存记录
    /// - Err(InvalidSchema): 该行键集未覆盖必需字段集
    /// - Err(InvalidRowValue): price / category_id 数值转换失败
    pub fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<NewProduct> {
        // 必需字段检查（逐行判定）
        if !REQUIRED_FIELDS.iter().all(|field| row.contains_key(*field)) {
            return Err(ImportError::InvalidSchema {
                required: format!("{{{}}}", REQUIRED_FIELDS.join(", ")),
            });
        }

        Ok(NewProduct {
            name: self.get_trimmed(row, "name"),
            brand: self.get_trimmed(row, "brand"),
            // description 缺省为空串后再 trim
            description: self.get_trimmed(row, "description"),
            price: self.parse_f64(row, "price", row_number)?,
            category_id: self.parse_i64(row, "category_id", row_number)?,
        })
    }

    /// 提取字符串字段（缺失时取空串,做 trim）
    fn get_trimmed(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).map(|v| v.trim()).unwrap_or_default().to_string()
    }

    /// 解析浮点数
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        let value = self.get_trimmed(row, key);
        value
            .parse::<f64>()
            .map_err(|_| ImportError::InvalidRowValue {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为浮点数: {}", value),
            })
    }

    /// 解析整数
    fn parse_i64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<i64> {
        let value = self.get_trimmed(row, key);
        value
            .parse::<i64>()
            .map_err(|_| ImportError::InvalidRowValue {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            })
    }
}
