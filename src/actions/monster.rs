//! Monster dispatcher backed by the `MonsterState` signal and the REST API.
//!
//! Validation responses race freely: whichever resolves last writes its
//! messages, with no generation check.

#[cfg(test)]
#[path = "monster_test.rs"]
mod monster_test;

use leptos::prelude::*;

use super::{ActionError, MonsterActions, VALIDATE_ALL};
use crate::net::api;
use crate::state::monster::{FieldKey, FormErrors, Monster, MonsterState};

#[derive(Clone, Debug)]
pub struct SignalMonsterActions {
    state: RwSignal<MonsterState>,
    api_base: String,
}

impl SignalMonsterActions {
    pub fn new(state: RwSignal<MonsterState>, api_base: impl Into<String>) -> Self {
        Self { state, api_base: api_base.into() }
    }
}

impl MonsterActions for SignalMonsterActions {
    async fn validate_add_form(&self, key: &str) -> Result<(), ActionError> {
        let form = self.state.with_untracked(|s| s.add_form.clone());
        let result = api::validate_monster_form(&self.api_base, key, &form)
            .await
            .map_err(ActionError::Request)?;
        let outcome = validation_outcome(key, &result);
        self.state.update(|s| apply_validation(&mut s.add_form_errors, key, result));
        outcome
    }

    fn update_add_form(&self, key: FieldKey, value: String) {
        self.state.update(|s| s.add_form.set(key, value));
    }

    async fn add_item(&self) -> Result<(), ActionError> {
        let form = self.state.with_untracked(|s| s.add_form.clone());
        let monster = api::create_monster(&self.api_base, &form)
            .await
            .map_err(ActionError::Rejected)?;
        log::info!("created monster {}", monster.id);
        self.state.update(|s| s.current_item = Some(monster));
        Ok(())
    }

    fn reset_add_form(&self) {
        self.state.update(MonsterState::reset_add_form);
    }

    fn current_item(&self) -> Option<Monster> {
        self.state.with_untracked(|s| s.current_item.clone())
    }
}

/// Merge a validator response into the store's errors: a single-field
/// response replaces only that field's entry, a full response replaces all.
pub fn apply_validation(errors: &mut FormErrors, key: &str, result: FormErrors) {
    if key == VALIDATE_ALL {
        *errors = result;
        return;
    }
    match result.message(key) {
        Some(message) => errors.set(key, message),
        None => errors.clear(key),
    }
}

/// Whether the validated scope came back clean.
///
/// # Errors
///
/// Returns `ActionError::Rejected` carrying the first message in scope.
pub fn validation_outcome(key: &str, result: &FormErrors) -> Result<(), ActionError> {
    let message = if key == VALIDATE_ALL { result.first_message() } else { result.message(key) };
    match message {
        Some(message) => Err(ActionError::Rejected(message.to_owned())),
        None => Ok(()),
    }
}
