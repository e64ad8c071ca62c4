//! Application service layer.
//!
//! Turns raw path segments into ids and drives the store. Ids that do not
//! parse never match a record, so they surface as the matching not-found error.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::{
    AppError, Article, FinanceStore, NotFoundError, Transaction, TransactionFields, User,
    parse_id,
};

/// Application service containing the finance use cases.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryStore::seeded());
/// let service = FinanceService::new(store);
///
/// let created = service.add_transaction("1", fields).await?;
/// ```
pub struct FinanceService {
    store: Arc<dyn FinanceStore>,
}

impl FinanceService {
    #[must_use]
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self { store }
    }

    /// Returns every user verbatim.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store.list_users().await
    }

    /// Returns one user's transactions in insertion order.
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, AppError> {
        let id = parse_user_id(user_id)?;
        self.store.list_transactions(id).await.inspect_err(|e| {
            warn!(error = %e, "Transaction listing failed");
        })
    }

    /// Appends a transaction to a user, assigning the next positional id.
    ///
    /// The fields are stored as given, partial or not.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the user does not exist.
    #[instrument(skip(self, fields), fields(field_count = fields.len()))]
    pub async fn add_transaction(
        &self,
        user_id: &str,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError> {
        let id = parse_user_id(user_id)?;
        let created = self
            .store
            .append_transaction(id, fields)
            .await
            .inspect_err(|e| warn!(error = %e, "Transaction append failed"))?;
        info!(user_id = id, transaction_id = created.id, "Transaction created");
        Ok(created)
    }

    /// Shallow-merges `fields` into an existing transaction.
    ///
    /// The user is resolved before the transaction, so a missing user wins
    /// over a missing transaction.
    #[instrument(skip(self, fields))]
    pub async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        fields: TransactionFields,
    ) -> Result<Transaction, AppError> {
        let uid = parse_user_id(user_id)?;

        let Some(tid) = parse_id(transaction_id) else {
            // Still report a missing user first.
            self.store.list_transactions(uid).await?;
            warn!(transaction_id, "Unparsable transaction id");
            return Err(NotFoundError::transaction(uid, transaction_id).into());
        };

        if fields.is_empty() {
            info!(user_id = uid, transaction_id = tid, "Empty update");
        }

        let updated = self
            .store
            .update_transaction(uid, tid, fields)
            .await
            .inspect_err(|e| warn!(error = %e, "Transaction update failed"))?;
        info!(user_id = uid, transaction_id = tid, "Transaction updated");
        Ok(updated)
    }

    /// Returns every article verbatim.
    #[instrument(skip(self))]
    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        self.store.list_articles().await
    }
}

fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    parse_id(raw).ok_or_else(|| {
        warn!(user_id = raw, "Unparsable user id");
        NotFoundError::user(raw).into()
    })
}
