//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{
    AppError, ConfigError, NotFoundError, TRANSACTION_NOT_FOUND_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
pub use traits::FinanceStore;
pub use types::{
    Article, ArticleId, Transaction, TransactionFields, TransactionId, TransactionKind, User,
    UserId, parse_id,
};
