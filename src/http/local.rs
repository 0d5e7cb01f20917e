//! Handlers for paths no route claims.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::response;
use crate::routing::RouteTable;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "api-gateway";

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoBody {
    pub message: &'static str,
    pub services: Vec<String>,
}

/// Answer a request that matched no route.
///
/// `GET /health` reports liveness; every other `GET`/`HEAD` gets the root
/// info listing the mounted prefixes. Other methods get a 404.
pub fn handle(routes: &RouteTable, method: &Method, path: &str) -> Response {
    if *method != Method::GET && *method != Method::HEAD {
        return response::not_found();
    }

    if path == "/health" {
        return health();
    }

    info(routes)
}

pub fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthBody {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
        .into_response()
}

pub fn info(routes: &RouteTable) -> Response {
    (
        StatusCode::OK,
        Json(InfoBody {
            message: "API Gateway is working!",
            services: routes.prefixes(),
        }),
    )
        .into_response()
}
