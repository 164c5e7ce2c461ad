//! 产品业务服务
//!
//! 按插入顺序保存产品，所有查找都是按 `id` 的线性扫描，命中第一条即返回。
//! 每个操作在整个执行期间持有同一把互斥锁。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{seed_products, Product};

/// 服务层错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("product {0} not found")]
    NotFound(i64),
    #[error("product {0} already exists")]
    Conflict(i64),
}

/// 创建产品时对重复 id 的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIds {
    /// 无条件追加
    #[default]
    Allow,
    /// 已存在相同 id 时返回 Conflict
    Reject,
}

#[derive(Clone)]
pub struct ProductService {
    products: Arc<Mutex<Vec<Product>>>,
    duplicate_ids: DuplicateIds,
}

impl ProductService {
    /// 带初始数据的服务
    pub fn new() -> Self {
        Self::with_products(seed_products())
    }

    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
            duplicate_ids: DuplicateIds::default(),
        }
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIds) -> Self {
        self.duplicate_ids = policy;
        self
    }

    // Vec 在任意两条语句之间都是一致的，锁中毒后可以直接继续使用
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.lock().clone()
    }

    pub fn get_product(&self, id: i64) -> Result<Product, ServiceError> {
        self.lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    pub fn create_product(&self, product: Product) -> Result<Product, ServiceError> {
        let mut products = self.lock();
        if self.duplicate_ids == DuplicateIds::Reject && products.iter().any(|p| p.id == product.id)
        {
            return Err(ServiceError::Conflict(product.id));
        }
        products.push(product.clone());
        debug!("产品已创建: id={}, 当前数量={}", product.id, products.len());
        Ok(product)
    }

    /// 整体替换第一条匹配记录，负载中的 `id` 同样会被写入
    pub fn update_product(&self, id: i64, product: Product) -> Result<Product, ServiceError> {
        let mut products = self.lock();
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        *slot = product.clone();
        debug!("产品已更新: path_id={}, stored_id={}", id, product.id);
        Ok(product)
    }

    pub fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        let mut products = self.lock();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        products.remove(index);
        debug!("产品已删除: id={}, 剩余数量={}", id, products.len());
        Ok(())
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
