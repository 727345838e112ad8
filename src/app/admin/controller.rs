//! 后台商品管理

use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{ActionResult, CoreError, ModelState, RedirectResult, ViewResult};
use crate::domain::{ImageUpload, Product, ProductRepository};

/// 保存与删除后跳转的后台首页
pub const ADMIN_INDEX: &str = "/admin";

#[derive(Clone)]
pub struct AdminController {
    repository: Arc<dyn ProductRepository>,
}

impl AdminController {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// 全部商品，保持存储顺序
    pub async fn index(&self) -> Result<ViewResult<Vec<Product>>, CoreError> {
        let products = self.repository.products().await?;
        Ok(ViewResult::new("Index", products))
    }

    /// 编辑页的商品；找不到时模型为空
    pub async fn edit(&self, product_id: i32) -> Result<ViewResult<Option<Product>>, CoreError> {
        let product = self.repository.find_product(product_id).await?;
        Ok(ViewResult::new("Edit", product))
    }

    pub fn create(&self) -> ViewResult<Product> {
        ViewResult::new("Edit", Product::default())
    }

    /// 模型状态有效时保存并跳转，否则带着错误重新渲染编辑页
    pub async fn save(
        &self,
        mut product: Product,
        model_state: &ModelState,
        image: Option<ImageUpload>,
    ) -> Result<ActionResult<Product>, CoreError> {
        if !model_state.is_valid() {
            let fields: Vec<&String> = model_state.errors().keys().collect();
            warn!(product_id = product.product_id, ?fields, "商品校验失败，未保存");
            return Ok(ActionResult::View(
                ViewResult::new("Edit", product).with_model_state(model_state.clone()),
            ));
        }

        if let Some(image) = image {
            image.apply_to(&mut product);
        }

        let saved = self.repository.save_product(product).await?;
        info!(product_id = saved.product_id, name = %saved.name, "商品已保存");

        Ok(ActionResult::Redirect(
            RedirectResult::to(ADMIN_INDEX).with_message(format!("{} 已保存", saved.name)),
        ))
    }

    pub async fn delete(&self, product_id: i32) -> Result<RedirectResult, CoreError> {
        let redirect = RedirectResult::to(ADMIN_INDEX);
        match self.repository.delete_product(product_id).await? {
            Some(deleted) => {
                info!(product_id, name = %deleted.name, "商品已删除");
                Ok(redirect.with_message(format!("{} 已删除", deleted.name)))
            }
            None => Ok(redirect),
        }
    }
}
