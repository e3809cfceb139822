//! 查询参数与动态查询条件

use serde::Deserialize;

use super::model::Product;
use crate::core::error::{ApiError, INVALID_MAX_PRICE, INVALID_MIN_PRICE, INVALID_PRODUCT_ID};

pub const SELECT_PRODUCTS: &str = "SELECT id, name, category, price::float8 AS price FROM products";

/// 按 ID 操作的查询参数 `?id=`
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn parse_id(&self) -> Result<i32, ApiError> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok())
            .ok_or_else(|| ApiError::invalid_input(INVALID_PRODUCT_ID))
    }
}

/// `GET /products` 的原始查询参数，校验后转换为 [`ProductFilter`]
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// `name` 子串匹配
    pub name: Option<String>,
    /// `category` 精确匹配
    pub category: Option<String>,
    /// 价格下限（含）
    pub min_price: Option<f64>,
    /// 价格上限（含）
    pub max_price: Option<f64>,
}

/// 绑定到 [`SearchQuery`] 占位符的参数值
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    Text(String),
    Float(f64),
}

/// SQL 语句及其参数，`args[i]` 对应 `$i+1`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub args: Vec<FilterArg>,
}

/// 条件和参数同步追加，占位符序号始终等于参数位置
#[derive(Default)]
struct Predicate {
    clauses: Vec<String>,
    args: Vec<FilterArg>,
}

impl Predicate {
    fn push(&mut self, condition: &str, arg: FilterArg) {
        self.args.push(arg);
        self.clauses.push(format!("{} ${}", condition, self.args.len()));
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_price(raw: Option<String>, message: &str) -> Result<Option<f64>, ApiError> {
    match non_empty(raw) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(Some(price)),
            _ => Err(ApiError::invalid_input(message)),
        },
    }
}

impl TryFrom<ProductSearchParams> for ProductFilter {
    type Error = ApiError;

    fn try_from(params: ProductSearchParams) -> Result<Self, Self::Error> {
        Ok(Self {
            name: non_empty(params.name),
            category: non_empty(params.category),
            min_price: parse_price(params.min_price, INVALID_MIN_PRICE)?,
            max_price: parse_price(params.max_price, INVALID_MAX_PRICE)?,
        })
    }
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn to_sql(&self) -> SearchQuery {
        let mut predicate = Predicate::default();

        if let Some(name) = &self.name {
            predicate.push("name LIKE", FilterArg::Text(format!("%{}%", name)));
        }
        if let Some(category) = &self.category {
            predicate.push("category =", FilterArg::Text(category.clone()));
        }
        if let Some(min_price) = self.min_price {
            predicate.push("price >=", FilterArg::Float(min_price));
        }
        if let Some(max_price) = self.max_price {
            predicate.push("price <=", FilterArg::Float(max_price));
        }

        let mut sql = SELECT_PRODUCTS.to_string();
        if !self.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicate.clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        SearchQuery {
            sql,
            args: predicate.args,
        }
    }

    /// 与 [`ProductFilter::to_sql`] 相同的条件，在内存中求值
    pub fn matches(&self, product: &Product) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| product.name.contains(name))
            && self
                .category
                .as_deref()
                .map_or(true, |category| product.category == category)
            && self.min_price.map_or(true, |min| product.price >= min)
            && self.max_price.map_or(true, |max| product.price <= max)
    }
}
