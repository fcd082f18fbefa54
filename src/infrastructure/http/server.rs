// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Axum HTTP surface.
//!
//! One handler pipeline serves every route: decode the request path (with
//! the configured backend prefix applied when there is one), then either
//! explain the decode as JSON or render the image. `GET /` additionally
//! accepts a JSON body describing a transform, which is first turned into a
//! canonical request path and then served like any other request.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path as RequestPath, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;

use crate::application::pipeline::{Pipeline, RenderError};
use crate::domain::backend::{compress_host, decode_request};
use crate::domain::explain::Explain;
use crate::domain::transform::request::{TransformRequest, create_request_path};

/// Body of every 400 answer.
pub const BAD_REQUEST_MESSAGE: &str = "Bad request.";
/// Body of every 500 answer.
pub const PROCESSING_ERROR_MESSAGE: &str = "Processing error.";

const NOT_FOUND_MESSAGE: &str = "404 page not found";

/// Server configuration, fixed at startup and threaded through the state.
#[derive(Debug, Default)]
pub struct ServerConfig {
    /// Fixed image storage backend. When unset, requests carry their origin
    /// as the first path segment.
    pub backend: Option<String>,
}

/// Shared state for the axum handlers.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<ServerConfig>,
    pub pipeline: Arc<Pipeline>,
}

/// Build the router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/{*path}", get(handle_image))
        .with_state(state)
}

/// Handle `GET /{path}`: decode, then explain or render.
async fn handle_image(
    State(state): State<ServerState>,
    RequestPath(path): RequestPath<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let display_path = format!("/{path}");

    respond(
        &state,
        &path,
        display_path,
        true,
        default_request_output(&headers),
        query.contains_key("explain"),
    )
    .await
}

/// Handle `GET /`: with a JSON body, build the canonical path first; with
/// an empty body, fall through to the regular pipeline for an empty path.
async fn handle_root(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let default_output = default_request_output(&headers);
    let explain = query.contains_key("explain");

    if body.trim().is_empty() {
        return respond(&state, "", "/".to_string(), true, default_output, explain).await;
    }

    let request: TransformRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(%err, "rejecting malformed transform request body");
            return (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE).into_response();
        }
    };

    let path = match create_request_path(&request) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(%err, "rejecting incomplete transform request body");
            return (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE).into_response();
        }
    };

    // A body that named its own backend already carries the compacted host
    // as the first segment; only bodies without one use the configured
    // backend like a plain request would.
    let apply_backend = request.backend.is_empty();
    let stripped = path.trim_start_matches('/').to_string();

    respond(&state, &stripped, path, apply_backend, default_output, explain).await
}

async fn respond(
    state: &ServerState,
    request_path: &str,
    display_path: String,
    apply_backend: bool,
    default_output: &str,
    explain: bool,
) -> Response {
    let mut effective = request_path.to_string();

    if apply_backend {
        if let Some(backend) = state.config.backend.as_deref() {
            if !backend.is_empty() {
                effective = format!("{}/{effective}", compress_host(backend));
            }
        }
    }

    let decoded = decode_request(&effective, default_output);

    if explain {
        return Json(Explain::from_decoded(display_path, &decoded)).into_response();
    }

    if decoded.fatal.is_some() {
        return (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE).into_response();
    }

    match state.pipeline.render(&decoded.transform).await {
        Ok(rendered) => (
            [(header::CONTENT_TYPE, rendered.content_type)],
            rendered.bytes,
        )
            .into_response(),
        Err(RenderError::Fetch(err)) => {
            tracing::debug!(source = %decoded.transform.image.source, %err, "origin fetch failed");
            (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
        }
        Err(err) => {
            tracing::warn!(path = %decoded.transform.path, %err, "image processing failed");
            (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR_MESSAGE).into_response()
        }
    }
}

/// Default output format for a request: webp for clients that advertise it.
fn default_request_output(headers: &HeaderMap) -> &'static str {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if accept.contains("image/webp") {
        "webp"
    } else {
        "jpg"
    }
}
