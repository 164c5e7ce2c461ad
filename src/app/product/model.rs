//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品记录，创建和更新时所有字段均为必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }
}

/// 进程启动时的三条初始产品
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "A high performance laptop", 999.99, 10),
        Product::new(2, "Smartphone", "A latest model smartphone", 599.99, 20),
        Product::new(3, "Tablet", "A lightweight tablet", 399.99, 15),
    ]
}
