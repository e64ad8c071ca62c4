//! Additional integration tests for request flows, body handling and docs.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use finance_api::api::create_router;
use finance_api::app::AppState;
use finance_api::domain::{Transaction, TransactionFields, TransactionKind};

fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::seeded())
}

#[tokio::test]
async fn test_transaction_lifecycle_flow() {
    let router = create_router(create_test_state());

    // 1. POST - append an expense
    let create_request = Request::builder()
        .method("POST")
        .uri("/users/1/transactions")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"type":"expense","amount":75000,"description":"Listrik"}"#,
        ))
        .unwrap();

    let create_response = router.clone().oneshot(create_request).await.unwrap();
    assert_eq!(create_response.status(), StatusCode::CREATED);

    let body_bytes = create_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let created: Transaction = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(created.id, 3);

    // 2. PUT - correct its description only
    let update_request = Request::builder()
        .method("PUT")
        .uri(format!("/users/1/transactions/{}", created.id))
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"description":"Listrik Januari"}"#))
        .unwrap();

    let update_response = router.clone().oneshot(update_request).await.unwrap();
    assert_eq!(update_response.status(), StatusCode::OK);

    // 3. GET - the user listing reflects both steps
    let users_request = Request::builder()
        .method("GET")
        .uri("/users")
        .body(Body::empty())
        .unwrap();

    let users_response = router.oneshot(users_request).await.unwrap();
    let body_bytes = users_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let users: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    let last = &users[0]["transactions"][2];
    assert_eq!(last["id"], 3);
    assert_eq!(last["type"], "expense");
    assert_eq!(last["amount"], 75000);
    assert_eq!(last["description"], "Listrik Januari");
}

#[tokio::test]
async fn test_body_id_never_changes_assigned_ids() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/users/1/transactions")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"id":100,"type":"income","amount":1,"description":"Bonus"}"#,
        ))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: Transaction = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.kind(), Some(TransactionKind::Income));

    let request = Request::builder()
        .method("PUT")
        .uri("/users/1/transactions/3")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"id":1,"description":"Bonus Tahunan"}"#))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list_request = Request::builder()
        .uri("/users/1/transactions")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(list_request).await.unwrap();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let transactions: Vec<Transaction> = serde_json::from_slice(&body_bytes).unwrap();
    let ids: Vec<i64> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(transactions[0].description(), Some("Gaji"));
    assert_eq!(transactions[2].description(), Some("Bonus Tahunan"));
}

#[tokio::test]
async fn test_create_with_unknown_type_is_stored_as_sent() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/users/1/transactions")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"type":"transfer","amount":1,"description":"x"}"#,
        ))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let list_request = Request::builder()
        .uri("/users/1/transactions")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(list_request).await.unwrap();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let transactions: Vec<serde_json::Value> = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[2]["type"], "transfer");
}

#[tokio::test]
async fn test_empty_update_returns_transaction_unchanged() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("PUT")
        .uri("/users/1/transactions/2")
        .header("Content-Type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let transaction: Transaction = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(
        transaction,
        Transaction::new(
            2,
            TransactionFields::record(TransactionKind::Expense, 200000, "Belanja"),
        )
    );
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api-docs/")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_docs_path_redirects_to_page() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api-docs")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/api-docs/");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let router = create_router(create_test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/api-docs.json")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let doc: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    assert_eq!(doc["info"]["title"], "API Manajemen Keuangan");
    assert!(doc["paths"]["/articles"]["get"].is_object());
}
