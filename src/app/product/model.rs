//! 产品数据模型

use serde::{Deserialize, Serialize};

/// `products` 表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// `PUT /product` 的请求体，整行替换；缺省字段取零值并覆盖原有列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl ProductPayload {
    /// 只接受 JSON 对象；数组形式的请求体直接拒绝
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}
