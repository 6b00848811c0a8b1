use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
};
use serde_json::json;
use tracing::info;

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    models::ProductPayload,
    response::send_success,
};

/// Path ids must be base-10 integers; anything else, including a segment that
/// does not percent-decode to UTF-8, is rejected before the store is consulted.
fn parse_id(raw: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    let Path(raw) = raw.map_err(|_| AppError::invalid_id())?;
    raw.parse().map_err(|_| AppError::invalid_id())
}

/// The body is decoded as JSON whatever `Content-Type` the client sent.
fn parse_payload(body: Result<Bytes, BytesRejection>) -> AppResult<ProductPayload> {
    let body = body.map_err(|_| AppError::invalid_payload())?;
    serde_json::from_slice(&body).map_err(|_| AppError::invalid_payload())
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Response> {
    let products = state.store.list().await?;

    info!(count = products.len(), "Listed products");

    Ok(send_success(StatusCode::OK, &products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    let product = state.store.get_by_id(id).await?;

    info!(id, "Fetched product");

    Ok(send_success(StatusCode::OK, &product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let payload = parse_payload(body)?;
    let product = state.store.create(payload).await?;

    info!(id = product.id, name = %product.name, "Created product");

    Ok(send_success(StatusCode::CREATED, &product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    let payload = parse_payload(body)?;
    let product = state.store.update(id, payload).await?;

    info!(id, "Updated product");

    Ok(send_success(StatusCode::OK, &product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = parse_id(id)?;
    state.store.delete(id).await?;

    info!(id, "Deleted product");

    Ok(send_success(
        StatusCode::OK,
        &json!({ "result": "Successful Deletion" }),
    ))
}
