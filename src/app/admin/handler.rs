//! 后台处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::app::AppState;
use crate::core::{CoreError, ModelState};
use crate::domain::{product::MAX_MIME_TYPE_LEN, ImageUpload, Product};

pub async fn index(State(state): State<AppState>) -> Result<Response, CoreError> {
    Ok(state.admin.index().await?.into_response())
}

pub async fn create(State(state): State<AppState>) -> Response {
    state.admin.create().into_response()
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, CoreError> {
    let view = state.admin.edit(id).await?;
    if view.model.is_none() {
        return Err(CoreError::NotFound(format!("商品 {} 不存在", id)));
    }
    Ok(view.into_response())
}

pub async fn save(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Response, CoreError> {
    let model_state = ModelState::from_validation(product.validate());
    let result = state.admin.save(product, &model_state, None).await?;
    Ok(result.into_response())
}

pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, CoreError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CoreError::BadRequest("缺少图片的 Content-Type".to_string()))?
        .to_string();

    if content_type.chars().count() > MAX_MIME_TYPE_LEN {
        return Err(CoreError::BadRequest(format!(
            "图片的 Content-Type 不能超过{}个字符",
            MAX_MIME_TYPE_LEN
        )));
    }

    if body.is_empty() {
        return Err(CoreError::BadRequest("图片内容为空".to_string()));
    }

    let product = state
        .admin
        .edit(id)
        .await?
        .model
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;

    let model_state = ModelState::from_validation(product.validate());
    let upload = ImageUpload::new(body.to_vec(), content_type);
    let result = state.admin.save(product, &model_state, Some(upload)).await?;
    Ok(result.into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, CoreError> {
    Ok(state.admin.delete(id).await?.into_response())
}
