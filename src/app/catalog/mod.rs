pub mod controller;
pub mod handler;
pub mod model;

pub use controller::ProductController;
