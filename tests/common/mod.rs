//! 控制器测试共用的模拟仓储

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sports_store::core::RepositoryError;
use sports_store::domain::{Product, ProductRepository};

/// 返回固定商品并记录保存、删除调用的模拟仓储
#[derive(Default)]
pub struct MockProductRepository {
    products: Vec<Product>,
    saved: Mutex<Vec<Product>>,
    deleted: Mutex<Vec<i32>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn saved(&self) -> Vec<Product> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<i32> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn into_shared(self) -> (Arc<Self>, Arc<dyn ProductRepository>) {
        let mock = Arc::new(self);
        let repository: Arc<dyn ProductRepository> = mock.clone();
        (mock, repository)
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn save_product(&self, product: Product) -> Result<Product, RepositoryError> {
        self.saved.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        self.deleted.lock().unwrap().push(product_id);
        Ok(self
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }
}

/// 始终失败的仓储
pub struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn save_product(&self, _product: Product) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn delete_product(&self, _product_id: i32) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

pub fn three_products() -> Vec<Product> {
    vec![
        Product::new(1, "P1", "Cat1"),
        Product::new(2, "P2", "Cat2"),
        Product::new(3, "P3", "Cat1"),
    ]
}
