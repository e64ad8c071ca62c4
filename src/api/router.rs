//! HTTP routing configuration with request tracing and OpenAPI documentation.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app::AppState;
use crate::app::config::DEFAULT_REQUEST_TIMEOUT;

use super::handlers::{
    ApiDoc, add_transaction_handler, list_articles_handler, list_transactions_handler,
    list_users_handler, update_transaction_handler,
};

/// Path of the interactive documentation page.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";

/// Create router with the default request timeout
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_router_with_timeout(app_state, DEFAULT_REQUEST_TIMEOUT)
}

/// Create router with a custom request timeout
pub fn create_router_with_timeout(app_state: Arc<AppState>, timeout: Duration) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ));

    // Path params share the name `id` so the two user routes do not conflict.
    Router::new()
        .route("/users", get(list_users_handler))
        .route(
            "/users/{id}/transactions",
            get(list_transactions_handler).post(add_transaction_handler),
        )
        .route(
            "/users/{id}/transactions/{transaction_id}",
            put(update_transaction_handler),
        )
        .route("/articles", get(list_articles_handler))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(middleware)
        .with_state(app_state)
}
