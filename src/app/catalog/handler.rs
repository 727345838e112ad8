//! 商品目录处理器

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use super::model::ListQuery;
use crate::app::AppState;
use crate::core::CoreError;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, CoreError> {
    let view = state
        .catalog
        .list(query.category.as_deref(), query.page.unwrap_or(1))
        .await?;
    Ok(view.into_response())
}

pub async fn categories(State(state): State<AppState>) -> Result<Response, CoreError> {
    Ok(state.catalog.categories().await?.into_response())
}

pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, CoreError> {
    state
        .catalog
        .get_image(id)
        .await?
        .map(IntoResponse::into_response)
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 没有图片", id)))
}
