//! 产品数据访问

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;

use super::model::{Product, ProductPayload};
use super::query::{FilterArg, ProductFilter, SELECT_PRODUCTS};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// `products` 表的数据访问接口，每个方法只执行一条语句
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;

    /// 整行更新 name、category、price，返回受影响行数
    async fn update(&self, id: i32, payload: &ProductPayload) -> Result<u64, RepositoryError>;

    /// 返回受影响行数
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{} WHERE id = $1", SELECT_PRODUCTS);
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let query = filter.to_sql();

        let mut statement = sqlx::query_as::<_, Product>(&query.sql);
        for arg in query.args {
            statement = match arg {
                FilterArg::Text(value) => statement.bind(value),
                FilterArg::Float(value) => statement.bind(value),
            };
        }

        let products = statement.fetch_all(&self.pool).await?;
        Ok(products)
    }

    async fn update(&self, id: i32, payload: &ProductPayload) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("UPDATE products SET name = $1, category = $2, price = $3 WHERE id = $4")
                .bind(&payload.name)
                .bind(&payload.category)
                .bind(payload.price)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// 内存实现，契约与 Postgres 版本一致，用于测试和本地运行
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i32, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let rows = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// 直接插入数据（服务本身不提供创建接口）
    pub async fn insert(&self, product: Product) {
        self.rows.write().await.insert(product.id, product);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, payload: &ProductPayload) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                *row = payload.clone().into_product(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        Ok(self.rows.write().await.remove(&id).map_or(0, |_| 1))
    }
}
