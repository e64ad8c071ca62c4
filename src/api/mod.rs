//! The API layer, containing web handlers and routing.

pub mod handlers;
pub mod router;
mod schemas;

pub use handlers::ApiDoc;
pub use router::{DOCS_PATH, OPENAPI_JSON_PATH, create_router, create_router_with_timeout};
