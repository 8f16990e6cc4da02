// ==========================================
// 库存销售管理系统 - 路由构建
// ==========================================
// 职责: HTTP 动词/路径 → API 操作的映射
// ==========================================

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::handlers::{category, product, sale};
use crate::app::state::AppState;

/// 构建应用路由
///
/// # 路由表
/// - GET    /products          查询所有商品
/// - POST   /products          创建单个商品
/// - POST   /products/upload   批量导入商品（multipart CSV）
/// - PUT    /products/{id}     按ID整体替换商品
/// - DELETE /products/{id}     按ID删除商品
/// - GET    /categories        查询所有品类
/// - POST   /categories        创建单个品类
/// - GET    /sales             查询销售记录（可选日期区间）
/// - POST   /sales             创建单条销售记录
/// - GET    /sales/total       全量销售额汇总
pub fn build_router(state: Arc<AppState>) -> Router {
    // 放开跨域限制（前端独立部署,与现状一致）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/products",
            get(product::list_products).post(product::create_product),
        )
        .route("/products/upload", post(product::upload_products))
        .route(
            "/products/{id}",
            put(product::update_product).delete(product::delete_product),
        )
        .route(
            "/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route("/sales", get(sale::list_sales).post(sale::create_sale))
        .route("/sales/total", get(sale::total_sales))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
