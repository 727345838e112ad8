//! 商品仓储抽象

use async_trait::async_trait;

use super::product::Product;
use crate::core::error::RepositoryError;

/// 商品持久化存储
///
/// 控制器只依赖这个 trait，具体后端（内存、PostgreSQL）在启动时注入。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 全部商品，按存储顺序返回
    async fn products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// 新商品（id 为 0）插入并分配标识，已有商品更新字段
    async fn save_product(&self, product: Product) -> Result<Product, RepositoryError>;

    /// 删除并返回被删除的商品，不存在时返回 `None`
    async fn delete_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn find_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products()
            .await?
            .into_iter()
            .find(|p| p.product_id == product_id))
    }
}
