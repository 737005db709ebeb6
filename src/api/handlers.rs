//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::build_agreement;
use crate::models::{RentalAgreement, RentalRequest, ToolChargePolicy};

use super::response::{ApiError, ApiResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/rentals/checkout", post(checkout_handler))
        .route("/api/tools", get(list_tools_handler))
        .route("/api/cache/invalidate/tools", delete(invalidate_cache_handler))
        .route("/api/cache/invalidate/all", delete(invalidate_cache_handler))
        .with_state(state)
}

/// Handler for POST /api/rentals/checkout.
///
/// Builds a rental agreement for the requested tool and returns it.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<RentalRequest>, JsonRejection>,
) -> Response {
    // Transaction ID ties the request log to the audit record
    let transaction_id = Uuid::new_v4();
    info!(transaction_id = %transaction_id, "Processing checkout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        transaction_id = %transaction_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        transaction_id = %transaction_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            audit(transaction_id, false, &error.message);
            return error.into_response();
        }
    };

    let catalog = state.catalog();
    let start_time = Instant::now();
    match build_agreement(&request, catalog.as_ref(), state.clock()) {
        Ok(agreement) => {
            info!(
                transaction_id = %transaction_id,
                tool_code = %agreement.tool_code(),
                charge_days = agreement.charge_days(),
                final_charge = %agreement.final_charge(),
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            debug!(transaction_id = %transaction_id, "Rental agreement\n{}", agreement);
            audit(
                transaction_id,
                true,
                &format!("Transaction successful for toolCode: {}", agreement.tool_code()),
            );
            ApiResponse::<RentalAgreement>::ok("Rental checkout successful", agreement)
                .into_response()
        }
        Err(err) => {
            warn!(
                transaction_id = %transaction_id,
                tool_code = %request.tool_code,
                error = %err,
                "Checkout failed"
            );
            audit(
                transaction_id,
                false,
                &format!("Transaction failed: {}", err),
            );
            ApiError::from(err).into_response()
        }
    }
}

/// Handler for GET /api/tools.
///
/// Lists the catalog's charge policies ordered by tool code.
async fn list_tools_handler(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();
    let tools: Vec<ToolChargePolicy> = catalog.policies().into_iter().cloned().collect();
    ApiResponse::ok(format!("{} tools available", tools.len()), tools).into_response()
}

/// Handler for DELETE /api/cache/invalidate/*.
///
/// Reloads the tool catalog from its source file.
async fn invalidate_cache_handler(State(state): State<AppState>) -> Response {
    match state.reload_catalog() {
        Ok(count) => ApiResponse::ok(
            "Tool catalog cache has been successfully cleared.",
            count,
        )
        .into_response(),
        Err(err) => {
            warn!(error = %err, "Catalog reload failed, keeping current catalog");
            ApiError::from(err).into_response()
        }
    }
}

/// Emits the audit record for a checkout attempt.
fn audit(transaction_id: Uuid, success: bool, message: &str) {
    if success {
        info!(target: "audit", transaction_id = %transaction_id, success, message);
    } else {
        warn!(target: "audit", transaction_id = %transaction_id, success, message);
    }
}
