use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo_types::{Quote, QuoteStatus};
use crate::error::FieldError;
use crate::extract::{collect, min_chars, Validate};

pub const MAX_LIMIT: u64 = 100;

/// Request body for a new quote request.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "serviceType", alias = "service_type")]
    pub service_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for QuoteRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        min_chars(&mut errors, "name", &self.name, 2);
        min_chars(&mut errors, "phone", &self.phone, 1);
        min_chars(&mut errors, "address", &self.address, 5);
        min_chars(&mut errors, "serviceType", &self.service_type, 1);
        collect(errors)
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: String,
    pub message: &'static str,
}

/// A stored quote as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub status: QuoteStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Quote> for QuoteDto {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            name: q.name,
            phone: q.phone,
            address: q.address,
            service_type: q.service_type,
            status: q.status,
            created_at: q.created_at,
            description: q.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}
fn default_page() -> u64 { 1 }
fn default_limit() -> u64 { 10 }

impl Validate for ListQuery {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.page < 1 {
            errors.push(FieldError::new("page", "must be greater than or equal to 1"));
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            errors.push(FieldError::new("limit", format!("must be between 1 and {MAX_LIMIT}")));
        }
        collect(errors)
    }
}

impl ListQuery {
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// `limit` must be non-zero.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteList {
    pub quotes: Vec<QuoteDto>,
    pub pagination: Pagination,
}
