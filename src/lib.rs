//! Finance API
//!
//! A small REST API over in-memory users, their income and expense
//! transactions, and read-only articles, with generated OpenAPI
//! documentation served through Swagger UI.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │   HTTP handlers, routing, OpenAPI document   │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │      Use cases, shared state, config         │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │          Types, store trait, errors          │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │   In-memory store, seed data, tracing setup  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Endpoints
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/users` | all users |
//! | GET | `/users/{id}/transactions` | one user's transactions |
//! | POST | `/users/{id}/transactions` | append a transaction (201) |
//! | PUT | `/users/{userId}/transactions/{transactionId}` | merge fields into a transaction |
//! | GET | `/articles` | all articles |
//! | GET | `/api-docs/` | Swagger UI (`/api-docs.json` for the raw document) |
//!
//! Lookup misses return 404 with a plain-text body. Request bodies are never
//! rejected: JSON object keys are stored as sent.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use finance_api::api::create_router;
//! use finance_api::app::AppState;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = Arc::new(AppState::seeded());
//!     let router = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;
