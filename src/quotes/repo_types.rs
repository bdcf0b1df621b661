use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Lifecycle status of a quote request. Only `Pending` is assigned here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Submitted,
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Quote record in the database.
#[derive(Debug, Clone)]
pub struct Quote {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub description: Option<String>,
    pub status: QuoteStatus,
    pub created_at: OffsetDateTime,
}

/// Quote record before insertion.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub description: Option<String>,
    pub status: QuoteStatus,
    pub created_at: OffsetDateTime,
}
