// ==========================================
// 库存销售管理系统 - 种子数据装载
// ==========================================
// 职责: 启动时从静态 CSV 文件批量写入三张表
// 说明: 直接字段映射,日期按固定格式解析,
//       不走批量导入接口的校验流程
// ==========================================

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::app::state::AppState;
use crate::domain::{NewCategory, NewProduct, NewSale};

/// 种子文件名（工作目录约定）
const CATEGORIES_FILE: &str = "categories.csv";
const PRODUCTS_FILE: &str = "products.csv";
const SALES_FILE: &str = "sales.csv";

/// 装载结果统计
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub sales: usize,
}

// ==========================================
// 种子行结构（多余列如 id 自动忽略,ID 由数据库分配）
// ==========================================

#[derive(Debug, Deserialize)]
struct CategorySeedRow {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ProductSeedRow {
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    brand: String,
    category_id: i64,
}

#[derive(Debug, Deserialize)]
struct SaleSeedRow {
    product_id: i64,
    quantity: i64,
    total_price: f64,
    date: String, // YYYY-MM-DD
}

/// 装载种子文件（存在哪个装哪个,缺失的跳过）
///
/// # 参数
/// - state: 应用状态（使用其仓储批量写入）
/// - seed_dir: 种子文件目录
///
/// # 说明
/// - 目标表已有数据时跳过,避免重启后重复装载
pub fn load_seed_files(state: &AppState, seed_dir: &Path) -> anyhow::Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    // 品类
    let categories_path = seed_dir.join(CATEGORIES_FILE);
    if state.category_repo.count()? > 0 {
        info!("categories 表已有数据,跳过种子装载");
    } else if categories_path.exists() {
        let rows = read_rows::<CategorySeedRow>(&categories_path)?;
        let staged: Vec<NewCategory> = rows
            .into_iter()
            .map(|row| NewCategory { name: row.name })
            .collect();
        summary.categories = state.category_repo.batch_insert(staged)?;
        info!(count = summary.categories, "品类种子数据装载完成");
    } else {
        warn!(path = %categories_path.display(), "品类种子文件不存在,跳过");
    }

    // 商品
    let products_path = seed_dir.join(PRODUCTS_FILE);
    if state.product_repo.count()? > 0 {
        info!("products 表已有数据,跳过种子装载");
    } else if products_path.exists() {
        let rows = read_rows::<ProductSeedRow>(&products_path)?;
        let staged: Vec<NewProduct> = rows
            .into_iter()
            .map(|row| NewProduct {
                name: row.name,
                description: row.description,
                price: row.price,
                brand: row.brand,
                category_id: row.category_id,
            })
            .collect();
        summary.products = state.product_repo.batch_insert(staged)?.len();
        info!(count = summary.products, "商品种子数据装载完成");
    } else {
        warn!(path = %products_path.display(), "商品种子文件不存在,跳过");
    }

    // 销售记录
    let sales_path = seed_dir.join(SALES_FILE);
    if state.sale_repo.count()? > 0 {
        info!("sales 表已有数据,跳过种子装载");
    } else if sales_path.exists() {
        let rows = read_rows::<SaleSeedRow>(&sales_path)?;
        let mut staged = Vec::with_capacity(rows.len());
        for row in rows {
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")?;
            staged.push(NewSale {
                product_id: row.product_id,
                quantity: row.quantity,
                total_price: row.total_price,
                date,
            });
        }
        summary.sales = state.sale_repo.batch_insert(staged)?;
        info!(count = summary.sales, "销售种子数据装载完成");
    } else {
        warn!(path = %sales_path.display(), "销售种子文件不存在,跳过");
    }

    Ok(summary)
}

/// 读取 CSV 文件并反序列化为行结构
fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result?);
    }
    Ok(rows)
}
