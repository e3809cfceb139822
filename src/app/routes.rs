//! 路由表

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::product::{
    handler::{delete_product, get_product, list_products, update_product},
    AppState,
};
use crate::core::middleware::request_logging_middleware;

/// | 方法   | 路径        | 处理器           |
/// |--------|-------------|------------------|
/// | GET    | /product    | `get_product`    |
/// | PUT    | /product    | `update_product` |
/// | DELETE | /product    | `delete_product` |
/// | GET    | /products   | `list_products`  |
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/product",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products", get(list_products))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
