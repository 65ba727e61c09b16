//! Transfer HTTP handler.
//!
//! `POST /transfer` decodes a `TransferRequest` and echoes it back with
//! 200. No balance is touched; the endpoint is accepted but not executed.

use axum::{
    Json,
    extract::rejection::JsonRejection,
};

use crate::{error::AppError, models::account::TransferRequest};

/// Accept a transfer request and echo it back.
pub async fn transfer(
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferRequest>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    tracing::debug!(
        to_account = request.to_account,
        amount = request.amount,
        "transfer accepted (not executed)"
    );

    Ok(Json(request))
}
