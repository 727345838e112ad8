//! 领域模型

pub mod product;
pub mod repository;

pub use product::{ImageUpload, Product};
pub use repository::ProductRepository;
