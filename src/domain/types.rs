use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Identifier of a user.
pub type UserId = i64;

/// Identifier of a transaction, unique within its owning user.
pub type TransactionId = i64;

/// Identifier of an article.
pub type ArticleId = i64;

/// Direction of money flow for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// Caller-supplied fields of a transaction, kept exactly as sent.
///
/// Nothing is validated: `type`, `amount`, `description` and any extra key
/// are stored with whatever JSON value the caller gave. The `id` key is
/// never part of the fields; the server owns transaction ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionFields(Map<String, Value>);

impl TransactionFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields for a well-formed record.
    pub fn record(
        kind: TransactionKind,
        amount: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self::new()
            .with_kind(kind)
            .with_amount(amount)
            .with_description(description)
    }

    /// Reads fields from a request body.
    ///
    /// A JSON object contributes its keys. Anything else (empty body,
    /// invalid JSON, arrays, scalars) contributes nothing.
    pub fn from_json_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Map<String, Value>>(body)
            .map(Self::from)
            .unwrap_or_default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_kind(self, kind: TransactionKind) -> Self {
        self.with("type", kind.as_str())
    }

    pub fn with_amount(self, amount: impl Into<Value>) -> Self {
        self.with("amount", amount)
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with("description", description.into())
    }

    /// Sets a field. The `id` key is dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        if key != "id" {
            self.0.insert(key, value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the fields would not change anything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow-merges these fields into `target`.
    ///
    /// Present keys overwrite, absent keys are left untouched, new keys are
    /// added. The target's id never changes.
    pub fn apply(&self, target: &mut Transaction) {
        for (key, value) in &self.0 {
            target.fields.insert(key.clone(), value.clone());
        }
    }
}

impl From<Map<String, Value>> for TransactionFields {
    fn from(mut map: Map<String, Value>) -> Self {
        map.remove("id");
        Self(map)
    }
}

/// A single income or expense record owned by one user.
///
/// Serializes as one flat object: `id` first, then the stored fields in
/// the order they were first set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub fields: TransactionFields,
}

impl Transaction {
    pub fn new(id: TransactionId, fields: TransactionFields) -> Self {
        Self { id, fields }
    }

    /// The `type` field, if it holds a known kind.
    pub fn kind(&self) -> Option<TransactionKind> {
        self.fields
            .get("type")
            .and_then(|v| TransactionKind::deserialize(v).ok())
    }

    /// The raw `amount` field.
    pub fn amount(&self) -> Option<&Value> {
        self.fields.get("amount")
    }

    /// The `description` field, if it is a string.
    pub fn description(&self) -> Option<&str> {
        self.fields.get("description").and_then(Value::as_str)
    }
}

/// A financial-account holder with an embedded list of transactions.
///
/// Serialized verbatim, password included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub phone: String,
    pub transactions: Vec<Transaction>,
}

impl User {
    /// Finds a transaction by id. First match wins.
    pub fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }

    /// Appends a new transaction, assigning `id = len + 1`.
    ///
    /// The id policy is positional and would collide if transactions were
    /// ever removed. No removal path exists.
    pub fn push_transaction(&mut self, fields: TransactionFields) -> &Transaction {
        let id = self.transactions.len() as TransactionId + 1;
        self.transactions.push(Transaction::new(id, fields));
        // Just pushed, so the list is non-empty.
        &self.transactions[self.transactions.len() - 1]
    }
}

/// A static, read-only informational content item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(id: ArticleId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Parses an id out of a raw path segment.
///
/// Leading whitespace is skipped and one optional sign is accepted. A
/// `0x`/`0X` prefix selects hexadecimal. The longest run of leading digits
/// in that radix is used, so `"7abc"` parses as 7 and `"0x1g"` as 1.
/// Returns `None` when no digits lead the segment or the value overflows.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }

    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
