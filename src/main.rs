// ==========================================
// 库存销售管理系统 - 服务主入口
// ==========================================
// 技术栈: axum + Rust + SQLite
// ==========================================

use std::sync::Arc;

use inventory_sales::app::{build_router, AppState};
use inventory_sales::config::AppConfig;
use inventory_sales::{logging, seed};

#[tokio::main]
async fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("库存销售管理系统 - 后端服务");
    tracing::info!("系统版本: {}", inventory_sales::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = AppConfig::from_env();
    tracing::info!("使用数据库: {}", config.db_path);

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = Arc::new(AppState::new(&config.db_path).expect("无法初始化AppState"));

    // 种子数据装载（存在哪个装哪个）
    match seed::load_seed_files(&app_state, &config.seed_dir) {
        Ok(summary) => tracing::info!(
            categories = summary.categories,
            products = summary.products,
            sales = summary.sales,
            "种子数据装载结束"
        ),
        Err(e) => tracing::warn!(error = %e, "种子数据装载失败(将继续启动)"),
    }

    // 启动HTTP服务
    let router = build_router(app_state);
    tracing::info!("启动HTTP服务: {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("无法绑定监听地址");

    axum::serve(listener, router).await.expect("HTTP服务异常退出");
}
