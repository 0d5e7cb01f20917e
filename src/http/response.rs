//! Gateway-originated responses.
//!
//! Backend responses are relayed untouched; only the responses the gateway
//! produces itself are built here. Error bodies stay generic so internal
//! addresses never reach the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// `503 {"error":"Service unavailable"}`
pub fn service_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorBody {
            error: "Service unavailable",
        }),
    )
        .into_response()
}

/// `404 {"error":"Not found"}`
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: "Not found" })).into_response()
}
