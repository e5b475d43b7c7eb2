//! Client configuration resolved at build time.
//!
//! The WASM bundle cannot read the process environment, so overrides are
//! baked in with `option_env!`:
//! - `MONSTER_API_BASE`: REST base path, default `/api`
//! - `MONSTER_VALIDATE_DEBOUNCE_MS`: validation quiet period, default 500
//! - `MONSTER_DEBOUNCE_SCOPE`: `per-field` (default) or `shared`
//!
//! Unparseable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::util::debounce::DebounceScope;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_VALIDATE_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub validate_debounce: Duration,
    pub debounce_scope: DebounceScope,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            validate_debounce: Duration::from_millis(DEFAULT_VALIDATE_DEBOUNCE_MS),
            debounce_scope: DebounceScope::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MONSTER_API_BASE"),
            option_env!("MONSTER_VALIDATE_DEBOUNCE_MS"),
            option_env!("MONSTER_DEBOUNCE_SCOPE"),
        )
    }

    pub fn from_values(api_base: Option<&str>, debounce_ms: Option<&str>, scope: Option<&str>) -> Self {
        let api_base = api_base
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_owned();
        let debounce_ms = debounce_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_VALIDATE_DEBOUNCE_MS);
        let debounce_scope = scope.and_then(DebounceScope::parse).unwrap_or_default();

        Self { api_base, validate_debounce: Duration::from_millis(debounce_ms), debounce_scope }
    }
}
