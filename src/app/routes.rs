//! 路由

use axum::{
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::{admin, catalog, AppState};
use crate::config::ServerConfig;
use crate::core::{middleware::request_logging_middleware, ApiResponse};

pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let admin_routes = Router::new()
        .route("/", get(admin::handler::index))
        .route("/create", get(admin::handler::create))
        .route("/products", post(admin::handler::save))
        .route("/products/:id", get(admin::handler::edit))
        .route("/products/:id/image", put(admin::handler::upload_image))
        .route("/products/:id/delete", post(admin::handler::delete));

    let catalog_routes = Router::new()
        .route("/", get(catalog::handler::list))
        .route("/categories", get(catalog::handler::categories))
        .route("/:id/image", get(catalog::handler::get_image));

    Router::new()
        .route("/health", get(health_check))
        .nest("/admin", admin_routes)
        .nest("/products", catalog_routes)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
        .with_state(state)
}

async fn health_check() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
