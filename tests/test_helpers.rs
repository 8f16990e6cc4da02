// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、应用状态构建等功能
// ==========================================

use std::error::Error;
use std::sync::Arc;

use inventory_sales::app::AppState;
use inventory_sales::db;
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    db::init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 创建测试用的应用状态（含全部仓储与API实例）
pub fn create_test_state(db_path: &str) -> Arc<AppState> {
    Arc::new(AppState::new(db_path).expect("无法初始化AppState"))
}

/// 合法的五字段 CSV（两行数据）
pub const VALID_CSV: &str = "name,brand,price,category_id,description\n\
                             Widget,Acme,9.99,1,A widget\n\
                             Gadget,Acme,19.99,2,A gadget\n";

/// 构造 multipart/form-data 请求体（单个 file 字段）
///
/// # 返回
/// - (content_type, body)
pub fn multipart_body(file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7f1c";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/csv\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
