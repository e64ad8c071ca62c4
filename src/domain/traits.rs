//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{Article, Transaction, TransactionFields, TransactionId, User, UserId};

/// Storage for users, their transactions, and articles.
///
/// Each method is one atomic step against the backing collections.
/// Misses are reported as `AppError::NotFound`.
#[async_trait]
pub trait FinanceStore: Send + Sync {
    /// All users in storage order, transactions included.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// The transactions of one user in insertion order.
    async fn list_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, AppError>;

    /// Appends a transaction to a user and returns it with its assigned id.
    async fn append_transaction(
        &self,
        user_id: UserId,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError>;

    /// Shallow-merges `fields` into an existing transaction and returns the result.
    async fn update_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError>;

    /// All articles in storage order.
    async fn list_articles(&self) -> Result<Vec<Article>, AppError>;
}
