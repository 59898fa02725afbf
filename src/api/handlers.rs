//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::{RentalAgreement, ToolPolicy};
use crate::report::render_agreement;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tools", get(list_tools_handler))
        .route("/checkout", post(checkout_handler))
        .route("/checkout/receipt", post(receipt_handler))
        .with_state(state)
}

/// Handler for GET /tools.
///
/// Returns every catalog tool, ordered by code.
async fn list_tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tools: Vec<ToolPolicy> = state.config().tools().into_iter().cloned().collect();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(tools),
    )
}

/// Handler for POST /checkout.
///
/// Returns the rental agreement as JSON.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_payload(rejection, correlation_id),
    };

    match perform_checkout(&state, request, correlation_id).await {
        Ok(agreement) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(agreement),
        )
            .into_response(),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /checkout/receipt.
///
/// Same input as `/checkout`; returns the rendered plain-text receipt.
async fn receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_payload(rejection, correlation_id),
    };

    match perform_checkout(&state, request, correlation_id).await {
        Ok(agreement) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_agreement(&agreement),
        )
            .into_response(),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Resolves the tool and builds the agreement.
///
/// Charge-day counting walks every date of the rental, so it runs on the
/// blocking pool rather than the async executor.
async fn perform_checkout(
    state: &AppState,
    request: CheckoutRequest,
    correlation_id: Uuid,
) -> Result<RentalAgreement, RentalError> {
    let start_time = Instant::now();

    let tool = state.config().get_tool(&request.tool_code)?.clone();
    let rental = request.into_rental_request(tool);
    let agreement = tokio::task::spawn_blocking(move || rental.checkout())
        .await
        .map_err(|e| {
            error!(correlation_id = %correlation_id, "checkout task join error: {e}");
            RentalError::CalculationError {
                message: format!("checkout task failed: {}", e),
            }
        })??;

    info!(
        correlation_id = %correlation_id,
        tool_code = %agreement.tool_code,
        rental_days = agreement.rental_days,
        charge_days = agreement.charge_days,
        final_charge = %agreement.final_charge,
        duration_us = start_time.elapsed().as_micros(),
        "Checkout completed successfully"
    );

    Ok(agreement)
}

/// Converts a JSON extraction failure into a 400 response.
fn reject_payload(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Converts an engine error into its HTTP response.
fn error_response(err: RentalError, correlation_id: Uuid) -> Response {
    if err.is_validation() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Checkout rejected"
        );
    } else {
        error!(
            correlation_id = %correlation_id,
            error = %err,
            "Checkout failed"
        );
    }
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
