//! Application error types with proper error chaining.

use thiserror::Error;

/// Plain-text body returned when a user lookup misses.
pub const USER_NOT_FOUND_MESSAGE: &str = "Pengguna tidak ditemukan";

/// Plain-text body returned when a transaction lookup misses.
pub const TRANSACTION_NOT_FOUND_MESSAGE: &str = "Transaksi tidak ditemukan";

/// Lookup misses. The ids are kept as the raw path text for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("User not found: {0}")]
    User(String),
    #[error("Transaction not found: {transaction_id} (user {user_id})")]
    Transaction {
        user_id: String,
        transaction_id: String,
    },
}

impl NotFoundError {
    pub fn user(id: impl ToString) -> Self {
        NotFoundError::User(id.to_string())
    }

    pub fn transaction(user_id: impl ToString, transaction_id: impl ToString) -> Self {
        NotFoundError::Transaction {
            user_id: user_id.to_string(),
            transaction_id: transaction_id.to_string(),
        }
    }

    /// The text sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            NotFoundError::User(_) => USER_NOT_FOUND_MESSAGE,
            NotFoundError::Transaction { .. } => TRANSACTION_NOT_FOUND_MESSAGE,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("Internal error: {0}")]
    Internal(String),
}
