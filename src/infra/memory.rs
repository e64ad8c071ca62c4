//! In-memory implementation of [`FinanceStore`].
//!
//! All state lives for the process lifetime and is lost on exit. The
//! collections sit behind one `RwLock`, so concurrent appends to the same
//! user's transaction list are serialized.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    AppError, Article, FinanceStore, NotFoundError, Transaction, TransactionFields, TransactionId,
    User, UserId,
};

use super::seed;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    articles: Vec<Article>,
}

impl Collections {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }
}

/// Process-local store backed by plain vectors with linear-scan lookups.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    /// Creates a store holding the given collections.
    #[must_use]
    pub fn new(users: Vec<User>, articles: Vec<Article>) -> Self {
        Self {
            inner: RwLock::new(Collections { users, articles }),
        }
    }

    /// Creates a store holding the startup seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::articles())
    }
}

#[async_trait]
impl FinanceStore for InMemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn list_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, AppError> {
        let inner = self.inner.read().await;
        let user = inner
            .user(user_id)
            .ok_or_else(|| NotFoundError::user(user_id))?;
        Ok(user.transactions.clone())
    }

    async fn append_transaction(
        &self,
        user_id: UserId,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .user_mut(user_id)
            .ok_or_else(|| NotFoundError::user(user_id))?;
        let created = user.push_transaction(fields).clone();
        debug!(user_id, transaction_id = created.id, "Transaction appended");
        Ok(created)
    }

    async fn update_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .user_mut(user_id)
            .ok_or_else(|| NotFoundError::user(user_id))?;
        let transaction = user
            .transaction_mut(transaction_id)
            .ok_or_else(|| NotFoundError::transaction(user_id, transaction_id))?;
        fields.apply(transaction);
        debug!(user_id, transaction_id, fields = fields.len(), "Transaction updated");
        Ok(transaction.clone())
    }

    async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.inner.read().await.articles.clone())
    }
}
