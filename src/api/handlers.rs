//! HTTP request handlers with OpenAPI documentation.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, error};
use utoipa::OpenApi;

use super::schemas::{TransactionBody, TransactionSchema, UserSchema};
use crate::app::AppState;
use crate::domain::{AppError, Article, Transaction, TransactionFields, TransactionKind, User};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Manajemen Keuangan",
        version = "1.0.0",
        description = "API untuk mengelola pemasukan dan pengeluaran"
    ),
    servers(
        (url = "http://localhost:8080")
    ),
    paths(
        list_users_handler,
        list_transactions_handler,
        add_transaction_handler,
        update_transaction_handler,
        list_articles_handler,
    ),
    components(
        schemas(
            UserSchema,
            TransactionSchema,
            TransactionKind,
            TransactionBody,
            Article,
        )
    ),
    tags(
        (name = "users", description = "User endpoints"),
        (name = "transactions", description = "Per-user income and expense records"),
        (name = "articles", description = "Read-only finance articles")
    )
)]
pub struct ApiDoc;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    summary = "Ambil semua data pengguna",
    responses(
        (status = 200, description = "Berhasil mengambil data pengguna", body = [UserSchema])
    )
)]
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.service.list_users().await?;
    Ok(Json(users))
}

/// List the transactions of one user
#[utoipa::path(
    get,
    path = "/users/{id}/transactions",
    tag = "transactions",
    summary = "Ambil semua transaksi pengguna",
    params(
        ("id" = i64, Path, description = "ID pengguna")
    ),
    responses(
        (status = 200, description = "Berhasil mengambil data transaksi", body = [TransactionSchema]),
        (status = 404, description = "Pengguna tidak ditemukan", body = String, content_type = "text/plain")
    )
)]
pub async fn list_transactions_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.service.list_transactions(&id).await?;
    Ok(Json(transactions))
}

/// Add a transaction to a user
#[utoipa::path(
    post,
    path = "/users/{id}/transactions",
    tag = "transactions",
    summary = "Tambah transaksi baru untuk pengguna",
    params(
        ("id" = i64, Path, description = "ID pengguna")
    ),
    request_body = TransactionBody,
    responses(
        (status = 201, description = "Transaksi berhasil ditambahkan", body = TransactionSchema),
        (status = 404, description = "Pengguna tidak ditemukan", body = String, content_type = "text/plain")
    )
)]
pub async fn add_transaction_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let fields = transaction_fields(&headers, &body);
    let created = state.service.add_transaction(&id, fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update fields of an existing transaction
#[utoipa::path(
    put,
    path = "/users/{userId}/transactions/{transactionId}",
    tag = "transactions",
    summary = "Edit transaksi pengguna",
    params(
        ("userId" = i64, Path, description = "ID pengguna"),
        ("transactionId" = i64, Path, description = "ID transaksi")
    ),
    request_body = TransactionBody,
    responses(
        (status = 200, description = "Transaksi berhasil diperbarui", body = TransactionSchema),
        (status = 404, description = "Pengguna atau transaksi tidak ditemukan", body = String, content_type = "text/plain")
    )
)]
pub async fn update_transaction_handler(
    State(state): State<Arc<AppState>>,
    Path((user_id, transaction_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Transaction>, AppError> {
    let fields = transaction_fields(&headers, &body);
    let updated = state
        .service
        .update_transaction(&user_id, &transaction_id, fields)
        .await?;
    Ok(Json(updated))
}

/// List all articles
#[utoipa::path(
    get,
    path = "/articles",
    tag = "articles",
    summary = "Ambil semua artikel tentang keuangan",
    responses(
        (status = 200, description = "Berhasil mengambil artikel", body = [Article])
    )
)]
pub async fn list_articles_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.service.list_articles().await?;
    Ok(Json(articles))
}

/// Reads transaction fields out of a request body without ever rejecting it.
///
/// Only JSON content types are parsed. Any other body, or a JSON body that
/// is not an object, yields no fields, so the lookups alone decide the
/// response status.
fn transaction_fields(headers: &HeaderMap, body: &[u8]) -> TransactionFields {
    if body.is_empty() || !is_json(headers) {
        return TransactionFields::new();
    }
    let fields = TransactionFields::from_json_slice(body);
    if fields.is_empty() {
        debug!(len = body.len(), "Request body carried no fields");
    }
    fields
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound(not_found) => {
                (StatusCode::NOT_FOUND, not_found.public_message()).into_response()
            }
            AppError::Internal(_) => {
                error!(error = %self, "Server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
