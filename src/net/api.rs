//! REST API helpers for the Monster endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings; `actions` wraps them into
//! `ActionError` so the form can surface them in an alert.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::monster::{FormErrors, Monster, MonsterForm};

#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, ValidateRequest, ValidateResponse};

#[cfg(any(test, feature = "hydrate"))]
fn validate_endpoint(base: &str) -> String {
    format!("{}/monsters/validate", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_endpoint(base: &str) -> String {
    format!("{}/monsters", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_failed_message(status: u16) -> String {
    format!("validate request failed: {status}")
}

/// Prefer the backend's own message; fall back to the status code.
#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16, body_message: Option<String>) -> String {
    match body_message {
        Some(message) if !message.trim().is_empty() => message,
        _ => format!("create request failed: {status}"),
    }
}

/// Ask the remote validator about `field` (`""` for every field) of `form`
/// via `POST {base}/monsters/validate`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn validate_monster_form(base: &str, field: &str, form: &MonsterForm) -> Result<FormErrors, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&validate_endpoint(base))
            .json(&ValidateRequest { field, form })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(validate_failed_message(resp.status()));
        }
        let body: ValidateResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.errors)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, field, form);
        Err("not available on server".to_owned())
    }
}

/// Create a Monster from `form` via `POST {base}/monsters`.
///
/// # Errors
///
/// Returns the backend's error message, or a status message, when the create is refused.
pub async fn create_monster(base: &str, form: &MonsterForm) -> Result<Monster, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&create_endpoint(base))
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body_message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(create_failed_message(status, body_message));
        }
        resp.json::<Monster>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, form);
        Err("not available on server".to_owned())
    }
}
