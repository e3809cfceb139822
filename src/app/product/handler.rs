//! 产品处理器

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{
    model::{Product, ProductPayload},
    query::{IdParams, ProductFilter, ProductSearchParams},
    repository::{ProductRepository, RepositoryError},
};
use crate::core::error::{ApiError, INVALID_BODY, INVALID_PRODUCT_ID, INVALID_QUERY};

const FAILED_RETRIEVE_PRODUCT: &str = "Failed to retrieve product.";
const FAILED_RETRIEVE_PRODUCTS: &str = "Failed to retrieve products.";
const FAILED_UPDATE_PRODUCT: &str = "Failed to update product.";
const FAILED_DELETE_PRODUCT: &str = "Failed to delete product.";

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

/// 记录数据访问错误，对客户端只返回固定消息
fn internal(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(RepositoryError) -> ApiError {
    move |err| {
        error!(error = %err, "{} failed", operation);
        ApiError::internal(message)
    }
}

fn product_id(params: Result<Query<IdParams>, QueryRejection>) -> Result<i32, ApiError> {
    match params {
        Ok(Query(params)) => params.parse_id(),
        Err(_) => Err(ApiError::invalid_input(INVALID_PRODUCT_ID)),
    }
}

/// 获取单个产品 `GET /product?id=`
pub async fn get_product(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(params)?;

    state
        .repository
        .find_by_id(id)
        .await
        .map_err(internal("find_by_id", FAILED_RETRIEVE_PRODUCT))?
        .map(Json)
        .ok_or_else(ApiError::product_not_found)
}

/// 按条件查询产品 `GET /products?name=&category=&min_price=&max_price=`
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ProductSearchParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::invalid_input(INVALID_QUERY))?;
    let filter = ProductFilter::try_from(params)?;

    let products = state
        .repository
        .search(&filter)
        .await
        .map_err(internal("search", FAILED_RETRIEVE_PRODUCTS))?;

    Ok(Json(products))
}

/// 更新产品 `PUT /product?id=`，返回提交的数据而不是重新读取
pub async fn update_product(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(params)?;

    let payload = ProductPayload::from_json(&body).map_err(|err| {
        warn!(error = %err, "rejecting product update body");
        ApiError::invalid_input(INVALID_BODY)
    })?;

    let affected = state
        .repository
        .update(id, &payload)
        .await
        .map_err(internal("update", FAILED_UPDATE_PRODUCT))?;

    if affected == 0 {
        return Err(ApiError::product_not_found());
    }

    info!("Updated product {}", id);
    Ok(Json(payload.into_product(id)))
}

/// 删除产品 `DELETE /product?id=`
pub async fn delete_product(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let id = product_id(params)?;

    let affected = state
        .repository
        .delete(id)
        .await
        .map_err(internal("delete", FAILED_DELETE_PRODUCT))?;

    if affected == 0 {
        return Err(ApiError::product_not_found());
    }

    info!("Deleted product {}", id);
    Ok(StatusCode::NO_CONTENT)
}
