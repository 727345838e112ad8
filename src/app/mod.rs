//! 应用层：后台管理与商品目录

pub mod admin;
pub mod catalog;
pub mod routes;

use std::sync::Arc;

use crate::domain::ProductRepository;
use admin::AdminController;
use catalog::ProductController;

#[derive(Clone)]
pub struct AppState {
    pub admin: AdminController,
    pub catalog: ProductController,
}

impl AppState {
    /// 两个控制器共享同一个仓储
    pub fn new(repository: Arc<dyn ProductRepository>, page_size: usize) -> Self {
        Self {
            admin: AdminController::new(repository.clone()),
            catalog: ProductController::new(repository, page_size),
        }
    }
}

pub use routes::create_router;
