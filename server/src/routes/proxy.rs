//! Pass-through of `/api/monsters*` requests to the Monster backend.
//!
//! The browser talks to this server only; validation and creation are
//! answered by the backend at `MONSTER_BACKEND_URL`. Status and JSON body
//! are relayed unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Prefix the browser uses for API calls; stripped before forwarding.
pub const API_PREFIX: &str = "/api";

/// Map an incoming API path onto the backend base URL.
pub fn backend_url(base: &str, path: &str, query: Option<&str>) -> String {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let base = base.trim_end_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{base}{rest}?{q}"),
        _ => format!("{base}{rest}"),
    }
}

pub async fn forward(State(state): State<AppState>, method: Method, uri: Uri, body: Bytes) -> Response {
    let Some(base) = state.config.backend_url.as_deref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "monster backend not configured").into_response();
    };
    let url = backend_url(base, uri.path(), uri.query());

    let resp = match state
        .http
        .request(method.clone(), &url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "backend request failed");
            return (StatusCode::BAD_GATEWAY, "monster backend unreachable").into_response();
        }
    };

    let status = resp.status();
    match resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, %status, "backend responded");
            (status, [(CONTENT_TYPE, "application/json")], bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "backend body read failed");
            (StatusCode::BAD_GATEWAY, "monster backend response unreadable").into_response()
        }
    }
}
