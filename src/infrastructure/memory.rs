//! 内存商品仓储

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::error::RepositoryError;
use crate::domain::{Product, ProductRepository};

/// 以插入顺序保存商品的内存仓储
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用给定商品初始化，保留其原有标识与顺序
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// 带示例商品目录的仓储
    pub fn seeded() -> Self {
        Self::with_products(sample_products())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn save_product(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        if product.is_new() {
            product.product_id = products.iter().map(|p| p.product_id).max().unwrap_or(0) + 1;
            debug!(product_id = product.product_id, "插入新商品");
            products.push(product.clone());
            return Ok(product);
        }

        let stored = products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
            .ok_or(RepositoryError::NotFound(product.product_id))?;

        if product.image_data.is_none() {
            product.image_data = stored.image_data.take();
            product.image_mime_type = stored.image_mime_type.take();
        }
        *stored = product.clone();
        debug!(product_id = product.product_id, "更新商品");

        Ok(product)
    }

    async fn delete_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.product_id == product_id);
        Ok(index.map(|index| products.remove(index)))
    }
}

/// 示例商品目录
pub fn sample_products() -> Vec<Product> {
    let items = [
        ("Kayak", "A boat for one person", "Watersports", 27500),
        ("Lifejacket", "Protective and fashionable", "Watersports", 4895),
        ("Soccer Ball", "FIFA-approved size and weight", "Soccer", 1950),
        ("Corner Flags", "Give your playing field a professional touch", "Soccer", 3450),
        ("Stadium", "Flat-packed 35,000-seat stadium", "Soccer", 7950000),
        ("Thinking Cap", "Improve your brain efficiency by 75%", "Chess", 1600),
        ("Unsteady Chair", "Secretly give your opponent a disadvantage", "Chess", 2995),
        ("Human Chess Board", "A fun game for the family", "Chess", 7500),
        ("Bling-Bling King", "Gold-plated, diamond-studded King", "Chess", 120000),
    ];

    items
        .iter()
        .zip(1..)
        .map(|((name, description, category, cents), id)| {
            Product::new(id, *name, *category)
                .with_description(*description)
                .with_price(Decimal::new(*cents, 2))
        })
        .collect()
}
