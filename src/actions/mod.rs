//! Dispatch interface between pages and the shared store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read store snapshots directly but every write goes through these
//! traits. The signal-backed implementations in `monster` and `alert` are
//! what the app wires up; tests substitute recording doubles.

pub mod alert;
pub mod monster;

use thiserror::Error;

use crate::state::alert::Alert;
use crate::state::monster::{FieldKey, Monster};

/// Field key that asks the validator for every field at once.
pub const VALIDATE_ALL: &str = "";

/// Failure of an asynchronous action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The backend refused the request; the message is shown to the user as-is.
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("no Monster available after create")]
    MissingItem,
}

/// Writes and async operations on the Monster store slice.
///
/// Single-threaded by construction: futures run on the browser's local
/// executor, so no `Send` bound is imposed on them.
#[allow(async_fn_in_trait)]
pub trait MonsterActions {
    /// Validate `key` of the add form remotely, or every field for
    /// [`VALIDATE_ALL`]. Writes the resulting messages into the store and
    /// resolves to `Err` when the validated scope has any message.
    async fn validate_add_form(&self, key: &str) -> Result<(), ActionError>;

    /// Best-effort validation: the outcome only matters through the error
    /// messages written to the store, so failures are logged and dropped.
    async fn validate_add_form_best_effort(&self, key: &str) {
        if let Err(e) = self.validate_add_form(key).await {
            log::debug!("validation of {key:?} discarded: {e}");
        }
    }

    /// Synchronous store write of one form value.
    fn update_add_form(&self, key: FieldKey, value: String);

    /// Create a Monster from the current form; on success it becomes
    /// readable through [`MonsterActions::current_item`].
    async fn add_item(&self) -> Result<(), ActionError>;

    fn reset_add_form(&self);

    fn current_item(&self) -> Option<Monster>;
}

/// Sink for global alerts.
pub trait AlertActions {
    fn add_alert(&self, alert: Alert);
}
