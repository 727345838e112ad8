pub mod controller;
pub mod handler;

pub use controller::AdminController;
