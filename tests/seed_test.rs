// ==========================================
// 集成测试 - 种子数据装载
// ==========================================
// 覆盖范围: 三文件装载、缺失文件跳过、重复启动不重复装载
// ==========================================

mod test_helpers;

use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use inventory_sales::seed;

/// 在临时目录写入三个种子文件
fn write_seed_files(dir: &std::path::Path) {
    let mut f = fs::File::create(dir.join("categories.csv")).unwrap();
    writeln!(f, "id,name").unwrap();
    writeln!(f, "1,Kitchen").unwrap();
    writeln!(f, "2,Office").unwrap();

    let mut f = fs::File::create(dir.join("products.csv")).unwrap();
    writeln!(f, "id,name,description,price,brand,category_id").unwrap();
    writeln!(f, "1,Widget,A widget,9.99,Acme,1").unwrap();
    writeln!(f, "2,Gadget,A gadget,19.99,Acme,2").unwrap();
    writeln!(f, "3,Gizmo,,0.5,Umbrella,1").unwrap();

    let mut f = fs::File::create(dir.join("sales.csv")).unwrap();
    writeln!(f, "id,product_id,quantity,total_price,date").unwrap();
    writeln!(f, "1,1,2,19.98,2026-01-05").unwrap();
    writeln!(f, "2,2,1,19.99,2026-01-06").unwrap();
}

#[test]
fn test_load_all_seed_files() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());

    let summary = seed::load_seed_files(&state, seed_dir.path()).expect("装载应该成功");

    assert_eq!(summary.categories, 2);
    assert_eq!(summary.products, 3);
    assert_eq!(summary.sales, 2);

    // 直接字段映射（id 列忽略,ID 由数据库分配）
    let products = state.product_api.list_products().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "Widget");
    assert_eq!(products[2].description, "");

    // 日期按固定格式解析
    let sales = state.sale_api.list_sales(None, None).unwrap();
    assert_eq!(
        sales[0].date,
        NaiveDate::parse_from_str("2026-01-05", "%Y-%m-%d").unwrap()
    );

    assert_eq!(state.sale_api.total_sales().unwrap(), 19.98 + 19.99);
}

#[test]
fn test_seed_skips_missing_files() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);
    let seed_dir = tempfile::tempdir().unwrap();

    // 目录为空：三个文件都跳过,不报错
    let summary = seed::load_seed_files(&state, seed_dir.path()).expect("缺失文件应跳过");

    assert_eq!(summary.categories, 0);
    assert_eq!(summary.products, 0);
    assert_eq!(summary.sales, 0);
}

#[test]
fn test_seed_does_not_duplicate_on_restart() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());

    seed::load_seed_files(&state, seed_dir.path()).unwrap();
    // 第二次启动：各表已有数据,全部跳过
    let summary = seed::load_seed_files(&state, seed_dir.path()).unwrap();

    assert_eq!(summary.products, 0);
    assert_eq!(state.product_repo.count().unwrap(), 3);
    assert_eq!(state.category_repo.count().unwrap(), 2);
    assert_eq!(state.sale_repo.count().unwrap(), 2);
}
