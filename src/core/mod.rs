//! 核心层：错误、响应、模型状态与中间件

pub mod error;
pub mod middleware;
pub mod model_state;
pub mod response;

pub use error::{CoreError, RepositoryError};
pub use model_state::ModelState;
pub use response::{ActionResult, ApiResponse, FileResult, RedirectResult, ViewResult};
