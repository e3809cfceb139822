//! # 产品目录服务
//!
//! 基于单张 `products` 表的 HTTP 服务：
//! - `GET /product?id=` 获取单个产品
//! - `GET /products` 按 `name`、`category`、`min_price`、`max_price` 查询
//! - `PUT /product?id=` 整行更新
//! - `DELETE /product?id=` 删除
//!
//! 数据由外部写入，服务本身不保存状态

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::product::{AppState, Product, ProductPayload};
pub use app::routes::create_routes;
pub use infrastructure::config::Config;
