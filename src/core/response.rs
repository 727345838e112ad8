//! 核心响应处理模块
//!
//! 控制器返回三种页面结果：渲染视图、重定向和文件下载。
//! 视图以 JSON 信封的形式输出，不做模板渲染。

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::model_state::ModelState;

/// API 响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::new(true, data)
    }

    pub fn failure(data: T) -> Self {
        Self::new(false, data)
    }

    fn new(success: bool, data: T) -> Self {
        Self {
            success,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// 渲染视图结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<M> {
    #[serde(rename = "view")]
    pub view_name: &'static str,
    pub model: M,
    pub errors: ModelState,
}

impl<M> ViewResult<M> {
    pub fn new(view_name: &'static str, model: M) -> Self {
        Self {
            view_name,
            model,
            errors: ModelState::new(),
        }
    }

    pub fn with_model_state(mut self, state: ModelState) -> Self {
        self.errors = state;
        self
    }
}

impl<M: Serialize> IntoResponse for ViewResult<M> {
    fn into_response(self) -> Response {
        if self.errors.is_valid() {
            (StatusCode::OK, Json(ApiResponse::success(self))).into_response()
        } else {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiResponse::failure(self))).into_response()
        }
    }
}

/// 重定向结果，可附带一条状态消息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectResult {
    pub location: String,
    pub message: Option<String>,
}

impl RedirectResult {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IntoResponse for RedirectResult {
    fn into_response(self) -> Response {
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, self.location.clone())],
            Json(ApiResponse::success(self)),
        )
            .into_response()
    }
}

/// 文件下载结果
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    pub contents: Vec<u8>,
    pub content_type: String,
}

impl IntoResponse for FileResult {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            self.contents,
        )
            .into_response()
    }
}

/// 表单提交的结果：重新渲染或跳转
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    View(ViewResult<M>),
    Redirect(RedirectResult),
}

impl<M> ActionResult<M> {
    pub fn is_view(&self) -> bool {
        matches!(self, ActionResult::View(_))
    }
}

impl<M: Serialize> IntoResponse for ActionResult<M> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::View(view) => view.into_response(),
            ActionResult::Redirect(redirect) => redirect.into_response(),
        }
    }
}
