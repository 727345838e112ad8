//! # Sports Store
//!
//! 体育用品商店的商品目录与后台管理服务：
//! - 后台：商品列表、编辑、保存、删除
//! - 目录：分页列表、分类菜单、商品图片下载
//! - 存储：内存仓储与 PostgreSQL 仓储（`database` feature）

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use app::{create_router, AppState};
pub use config::Config;
