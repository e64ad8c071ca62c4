//! Documentation shapes for the OpenAPI document.
//!
//! Transactions are stored as flexible JSON records, so these structs only
//! describe the usual shape of a record. They are never constructed.
#![allow(dead_code)]

use utoipa::ToSchema;

use crate::domain::TransactionKind;

/// A transaction as returned by the API.
#[derive(ToSchema)]
#[schema(as = Transaction)]
pub struct TransactionSchema {
    /// Server-assigned id, unique within the owning user.
    #[schema(example = 1)]
    id: i64,
    #[schema(rename = "type")]
    kind: Option<TransactionKind>,
    #[schema(example = 500000)]
    amount: Option<f64>,
    #[schema(example = "Gaji")]
    description: Option<String>,
}

/// Body of a create or update request.
///
/// Every field is optional and stored as sent. Unknown keys are kept too.
/// An `id` key is ignored.
#[derive(ToSchema)]
pub struct TransactionBody {
    #[schema(rename = "type")]
    kind: Option<TransactionKind>,
    #[schema(example = 1000)]
    amount: Option<f64>,
    #[schema(example = "Belanja")]
    description: Option<String>,
}

/// A user with embedded transactions.
#[derive(ToSchema)]
#[schema(as = User)]
pub struct UserSchema {
    id: i64,
    name: String,
    email: String,
    password: String,
    gender: String,
    phone: String,
    transactions: Vec<TransactionSchema>,
}
