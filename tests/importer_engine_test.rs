// ==========================================
// 集成测试 - 商品批量导入完整流程
// ==========================================
// 测试目标: 验证从上传内容到落库的完整流程
// 覆盖范围: 全量成功、结构错误、行值错误、文件类型错误,
//           以及每种失败路径下数据库保持不变
// ==========================================

mod test_helpers;

use inventory_sales::importer::error::ImportError;
use inventory_sales::logging;

// ==========================================
// 测试用例 1: 合法文件全量导入
// ==========================================

#[tokio::test]
async fn test_import_valid_csv_creates_all_rows_in_order() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    let csv = "name,brand,price,category_id,description\n\
               Widget,Acme,9.99,1,A widget\n\
               Gadget,Acme,19.99,2, A gadget \n\
               Gizmo,Umbrella,0.5,1,\n";

    let created = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await
        .expect("导入应该成功");

    // N 行数据 → N 条记录,文件顺序
    assert_eq!(created.len(), 3);
    assert_eq!(created[0].name, "Widget");
    assert_eq!(created[1].name, "Gadget");
    assert_eq!(created[2].name, "Gizmo");

    // 每条记录分配了互不相同的ID
    assert!(created[0].id < created[1].id);
    assert!(created[1].id < created[2].id);

    // 字段清洗: description 做了 trim
    assert_eq!(created[1].description, "A gadget");
    assert_eq!(created[2].description, "");

    // 落库对账: 列表查询与导入结果一致
    let listed = state.product_api.list_products().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].id, created[0].id);
    assert_eq!(listed[0].brand, "Acme");
}

// ==========================================
// 测试用例 2: 表头缺少必需字段
// ==========================================

#[tokio::test]
async fn test_import_missing_header_column_fails_with_invalid_schema() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    // 缺 description 列
    let csv = "name,brand,price,category_id\n\
               Widget,Acme,9.99,1\n";

    let result = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await;

    match result {
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidSchema { required })) => {
            // 错误消息携带完整必需字段集
            for field in ["name", "brand", "price", "category_id", "description"] {
                assert!(required.contains(field), "必需字段集应包含 {}", field);
            }
        }
        other => panic!("期望 InvalidSchema,实际 {:?}", other),
    }

    // 数据库保持不变
    assert_eq!(state.product_repo.count().unwrap(), 0);
}

// ==========================================
// 测试用例 3: 行值转换失败（整批中止）
// ==========================================

#[tokio::test]
async fn test_import_invalid_price_aborts_whole_batch() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    // 第 1、2 行合法,第 3 行 price 非数值
    let csv = "name,brand,price,category_id,description\n\
               Widget,Acme,9.99,1,ok\n\
               Gadget,Acme,19.99,2,ok\n\
               Broken,Acme,abc,1,bad\n";

    let result = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await;

    match result {
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidRowValue {
            row,
            field,
            ..
        })) => {
            assert_eq!(row, 3, "行号应为 1 起算的数据行号");
            assert_eq!(field, "price");
        }
        other => panic!("期望 InvalidRowValue,实际 {:?}", other),
    }

    // 前两行虽然已暂存,但未提交——数据库保持不变
    assert_eq!(state.product_repo.count().unwrap(), 0);
}

#[tokio::test]
async fn test_import_invalid_category_id_reports_row_number() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    let csv = "name,brand,price,category_id,description\n\
               Widget,Acme,9.99,x9,ok\n";

    let result = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await;

    match result {
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidRowValue {
            row,
            field,
            ..
        })) => {
            assert_eq!(row, 1);
            assert_eq!(field, "category_id");
        }
        other => panic!("期望 InvalidRowValue,实际 {:?}", other),
    }

    assert_eq!(state.product_repo.count().unwrap(), 0);
}

// ==========================================
// 测试用例 4: 文件类型检查（不读内容）
// ==========================================

#[tokio::test]
async fn test_import_non_csv_filename_rejected_without_reading_content() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    // 内容是非法 UTF-8 字节——若先读内容会报编码错误,
    // 此处必须直接命中文件类型错误
    let garbage: &[u8] = &[0xff, 0xfe, 0x00, 0x42];

    let result = state
        .product_api
        .upload_products("products.txt", garbage)
        .await;

    match result {
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidFileKind(_))) => {}
        other => panic!("期望 InvalidFileKind,实际 {:?}", other),
    }

    assert_eq!(state.product_repo.count().unwrap(), 0);
}

// ==========================================
// 测试用例 5: 仅表头文件
// ==========================================

#[tokio::test]
async fn test_import_header_only_succeeds_with_empty_result() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    let csv = "name,brand,price,category_id,description\n";

    let created = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await
        .expect("仅表头文件应导入成功");

    assert!(created.is_empty());
    assert_eq!(state.product_repo.count().unwrap(), 0);
}

// ==========================================
// 测试用例 6: 短行（键集缺失,逐行判定）
// ==========================================

#[tokio::test]
async fn test_import_short_row_aborts_with_invalid_schema() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    // 第 1 行合法,第 2 行缺列——逐行必需字段判定应整批中止
    let csv = "name,brand,price,category_id,description\n\
               Widget,Acme,9.99,1,ok\n\
               Gadget,Acme\n";

    let result = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await;

    assert!(matches!(
        result,
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidSchema { .. }))
    ));
    assert_eq!(state.product_repo.count().unwrap(), 0);
}

// ==========================================
// 测试用例 7: 多余列忽略
// ==========================================

#[tokio::test]
async fn test_import_extra_columns_ignored() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    let csv = "name,brand,price,category_id,description,color\n\
               Widget,Acme,9.99,1,ok,red\n";

    let created = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await
        .expect("多余列应被忽略");

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Widget");
}

// ==========================================
// 测试用例 8: 示例场景（第 2 行 price 非数值）
// ==========================================

#[tokio::test]
async fn test_import_example_scenario_fails_on_row_two() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = test_helpers::create_test_state(&db_path);

    let csv = "name,brand,price,category_id,description\n\
               Widget,Acme,9.99,1,\"A widget\"\n\
               Gadget,Acme,abc,2,\"Bad\"\n";

    let result = state
        .product_api
        .upload_products("products.csv", csv.as_bytes())
        .await;

    match result {
        Err(inventory_sales::api::ApiError::Import(ImportError::InvalidRowValue { row, .. })) => {
            assert_eq!(row, 2);
        }
        other => panic!("期望 InvalidRowValue(2),实际 {:?}", other),
    }

    assert_eq!(state.product_repo.count().unwrap(), 0);
}
