use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::{ListQuery, Pagination, QuoteDto, QuoteList, QuoteRequest, QuoteResponse};
use super::repo_types::{NewQuote, QuoteStatus};
use crate::{
    error::AppError,
    extract::{ValidJson, ValidQuery},
    state::AppState,
};

pub fn quote_routes() -> Router<AppState> {
    Router::new().route("/api/quotes", post(create_quote).get(list_quotes))
}

#[instrument(skip(state, payload))]
pub async fn create_quote(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = NewQuote {
        name: payload.name,
        phone: payload.phone,
        address: payload.address,
        service_type: payload.service_type,
        description: payload.description,
        status: QuoteStatus::Pending,
        created_at: OffsetDateTime::now_utc(),
    };
    let id = state
        .store
        .insert_quote(quote)
        .await
        .map_err(AppError::infra("Failed to create quote"))?;
    info!(quote_id = %id, "quote submitted");
    Ok(Json(QuoteResponse {
        id,
        message: "Quote request submitted successfully",
    }))
}

#[instrument(skip_all, fields(page = query.page, limit = query.limit))]
pub async fn list_quotes(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<QuoteList>, AppError> {
    let total = state
        .store
        .count_quotes()
        .await
        .map_err(AppError::infra("Failed to fetch quotes"))?;
    let quotes = state
        .store
        .list_quotes(query.skip(), query.limit)
        .await
        .map_err(AppError::infra("Failed to fetch quotes"))?;

    Ok(Json(QuoteList {
        quotes: quotes.into_iter().map(QuoteDto::from).collect(),
        pagination: Pagination::new(query.page, query.limit, total),
    }))
}
