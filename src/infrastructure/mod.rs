//! 基础设施层：存储后端与日志

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod memory;

pub use logger::init_logging;
pub use memory::InMemoryProductRepository;
