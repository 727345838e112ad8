//! 商品目录

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use super::model::{PagingInfo, ProductsListViewModel};
use crate::core::{CoreError, FileResult, ViewResult};
use crate::domain::ProductRepository;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

#[derive(Clone)]
pub struct ProductController {
    repository: Arc<dyn ProductRepository>,
    page_size: usize,
}

impl ProductController {
    pub fn new(repository: Arc<dyn ProductRepository>, page_size: usize) -> Self {
        Self {
            repository,
            page_size,
        }
    }

    /// 按分类过滤并分页的商品列表，页码从 1 开始
    pub async fn list(
        &self,
        category: Option<&str>,
        page: usize,
    ) -> Result<ViewResult<ProductsListViewModel>, CoreError> {
        let page = page.max(1);

        let mut products: Vec<_> = self
            .repository
            .products()
            .await?
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect();
        products.sort_by_key(|p| p.product_id);

        let paging_info = PagingInfo {
            current_page: page,
            items_per_page: self.page_size,
            total_items: products.len(),
        };

        let products = products
            .into_iter()
            .skip((page - 1).saturating_mul(self.page_size))
            .take(self.page_size)
            .collect();

        Ok(ViewResult::new(
            "List",
            ProductsListViewModel {
                products,
                paging_info,
                current_category: category.map(str::to_string),
            },
        ))
    }

    /// 导航菜单：去重并排序的分类
    pub async fn categories(&self) -> Result<ViewResult<Vec<String>>, CoreError> {
        let categories: BTreeSet<String> = self
            .repository
            .products()
            .await?
            .into_iter()
            .map(|p| p.category)
            .collect();

        Ok(ViewResult::new("Menu", categories.into_iter().collect()))
    }

    /// 商品图片；商品不存在或没有图片时返回 `None`
    pub async fn get_image(&self, product_id: i32) -> Result<Option<FileResult>, CoreError> {
        let Some(product) = self.repository.find_product(product_id).await? else {
            debug!(product_id, "图片请求的商品不存在");
            return Ok(None);
        };

        let Some(contents) = product.image_data else {
            return Ok(None);
        };

        Ok(Some(FileResult {
            contents,
            content_type: product
                .image_mime_type
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
        }))
    }
}
