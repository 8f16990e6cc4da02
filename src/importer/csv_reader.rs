// ==========================================
// 库存销售管理系统 - CSV 读取器
// ==========================================
// 职责: 上传文本 → 逐行键值映射（表头为键）
// 说明: 只做解析,字段校验与类型转换在 RowMapper
// ==========================================

use crate::importer::error::ImportResult;
use csv::ReaderBuilder;
use std::collections::HashMap;

pub struct CsvReader;

impl CsvReader {
    /// 解析 CSV 文本为逐行键值映射
    ///
    /// # 参数
    /// - content: 已解码的 CSV 文本（首行为表头）
    ///
    /// # 返回
    /// - Ok(Vec<HashMap<String, String>>): 数据行列表（文件顺序）
    ///
    /// # 说明
    /// - 表头列名做 trim
    /// - 行长度允许与表头不一致（短行产生的键集缺失由 RowMapper 判定）
    /// - 跳过完全空白的行
    pub fn parse_str(&self, content: &str) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(content.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.trim().is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_csv() {
        let content = "name,brand,price,category_id,description\n\
                       Widget,Acme,9.99,1,A widget\n\
                       Gadget,Acme,19.99,2,A gadget\n";

        let reader = CsvReader;
        let records = reader.parse_str(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&"Widget".to_string()));
        assert_eq!(records[1].get("price"), Some(&"19.99".to_string()));
    }

    #[test]
    fn test_parse_header_only() {
        let content = "name,brand,price,category_id,description\n";

        let reader = CsvReader;
        let records = reader.parse_str(content).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_skip_empty_rows() {
        let content = "name,brand,price,category_id,description\n\
                       Widget,Acme,9.99,1,A widget\n\
                       ,,,,\n\
                       Gadget,Acme,19.99,2,A gadget\n";

        let reader = CsvReader;
        let records = reader.parse_str(content).unwrap();

        // 应跳过空行
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_short_row_missing_keys() {
        // 短行只产生前两个键,后续字段缺失
        let content = "name,brand,price,category_id,description\nWidget,Acme\n";

        let reader = CsvReader;
        let records = reader.parse_str(content).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].contains_key("name"));
        assert!(!records[0].contains_key("price"));
    }

    #[test]
    fn test_parse_extra_columns_kept_by_header() {
        // 表头之外的多余值没有对应键,直接忽略
        let content = "name,brand\nWidget,Acme,extra\n";

        let reader = CsvReader;
        let records = reader.parse_str(content).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
    }
}
