//! Wire schema for the Monster REST endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::monster::{FormErrors, MonsterForm};

/// Body of `POST {base}/monsters/validate`. An empty `field` asks for every field.
#[derive(Debug, Serialize)]
pub struct ValidateRequest<'a> {
    pub field: &'a str,
    pub form: &'a MonsterForm,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub errors: FormErrors,
}

/// Error body the backend attaches to non-2xx responses, when it has one.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
