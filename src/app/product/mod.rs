//! 产品模块：模型、查询参数、数据访问、处理器

pub mod handler;
pub mod model;
pub mod query;
pub mod repository;

pub use handler::AppState;
pub use model::{Product, ProductPayload};
pub use query::ProductFilter;
pub use repository::{
    InMemoryProductRepository, PgProductRepository, ProductRepository, RepositoryError,
};
