//! Event handling for the add-Monster page, independent of rendering.
//!
//! DESIGN
//! ======
//! The page component owns layout only. Every handler lives here behind
//! the `MonsterActions`, `AlertActions`, `Navigator` and `Sleeper` seams so
//! the whole submit pipeline runs under unit tests.
//!
//! Submit flow per click:
//! `Validating -> Creating -> Navigated`, or `Alerted` from whichever stage
//! failed. There are no retries.

#[cfg(test)]
#[path = "monster_add_form_test.rs"]
mod monster_add_form_test;

use std::rc::Rc;

use crate::actions::{ActionError, AlertActions, MonsterActions, VALIDATE_ALL};
use crate::routing::{MONSTER_DETAIL, Navigator};
use crate::state::alert::Alert;
use crate::state::monster::{FieldKey, FormErrors, ItemId};
use crate::util::debounce::{Debouncer, LocalTask, Sleeper};

/// Stage of the submit pipeline that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStage {
    Validating,
    Creating,
    Reading,
}

/// Terminal state of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigated(ItemId),
    Alerted { stage: SubmitStage, error: ActionError },
}

pub fn submit_disabled(errors: &FormErrors) -> bool {
    errors.has_values()
}

pub fn created_message(id: &ItemId) -> String {
    format!("Monster added with id: {id}")
}

pub fn failure_message(error: &ActionError) -> String {
    format!("Failed to add Monster: {error}")
}

pub struct AddFormController<A, L, N, S> {
    actions: Rc<A>,
    alerts: Rc<L>,
    navigator: Rc<N>,
    sleeper: Rc<S>,
    debouncer: Debouncer<FieldKey>,
}

impl<A, L, N, S> Clone for AddFormController<A, L, N, S> {
    fn clone(&self) -> Self {
        Self {
            actions: Rc::clone(&self.actions),
            alerts: Rc::clone(&self.alerts),
            navigator: Rc::clone(&self.navigator),
            sleeper: Rc::clone(&self.sleeper),
            debouncer: self.debouncer.clone(),
        }
    }
}

impl<A, L, N, S> AddFormController<A, L, N, S>
where
    A: MonsterActions + 'static,
    L: AlertActions,
    N: Navigator,
    S: Sleeper,
{
    pub fn new(actions: A, alerts: L, navigator: N, sleeper: S, debouncer: Debouncer<FieldKey>) -> Self {
        Self {
            actions: Rc::new(actions),
            alerts: Rc::new(alerts),
            navigator: Rc::new(navigator),
            sleeper: Rc::new(sleeper),
            debouncer,
        }
    }

    /// Validate `key` right away. Best-effort: failures never reach the user.
    pub fn handle_blur(&self, key: FieldKey) -> LocalTask {
        let actions = Rc::clone(&self.actions);
        Box::pin(async move { actions.validate_add_form_best_effort(key.as_str()).await })
    }

    /// Write `value` to the store now, then arm a debounced validation of `key`.
    pub fn handle_change(&self, key: FieldKey, value: String) -> LocalTask {
        self.actions.update_add_form(key, value);
        let actions = Rc::clone(&self.actions);
        self.debouncer.debounce(key, self.sleeper.as_ref(), move || async move {
            actions.validate_add_form_best_effort(key.as_str()).await;
        })
    }

    /// Run the submit pipeline once and report the result through an alert
    /// and, on success, a transition to the new record's detail view.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        match self.submit().await {
            Ok(id) => {
                self.alerts.add_alert(Alert::success(created_message(&id)));
                self.navigator.transition_to(MONSTER_DETAIL, &id);
                SubmitOutcome::Navigated(id)
            }
            Err((stage, error)) => {
                log::warn!("add monster failed while {stage:?}: {error}");
                self.alerts.add_alert(Alert::error(failure_message(&error)));
                SubmitOutcome::Alerted { stage, error }
            }
        }
    }

    async fn submit(&self) -> Result<ItemId, (SubmitStage, ActionError)> {
        self.actions
            .validate_add_form(VALIDATE_ALL)
            .await
            .map_err(|e| (SubmitStage::Validating, e))?;
        self.actions.add_item().await.map_err(|e| (SubmitStage::Creating, e))?;
        self.actions
            .current_item()
            .map(|item| item.id)
            .ok_or((SubmitStage::Reading, ActionError::MissingItem))
    }

    pub fn handle_reset(&self) {
        self.actions.reset_add_form();
    }
}
