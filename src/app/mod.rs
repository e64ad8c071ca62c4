//! Application layer containing business logic and shared state.

pub mod config;
pub mod service;
pub mod state;

pub use config::ServerConfig;
pub use service::FinanceService;
pub use state::AppState;
