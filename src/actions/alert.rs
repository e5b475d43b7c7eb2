//! Alert dispatcher backed by the `AlertState` signal.

use leptos::prelude::*;

use super::AlertActions;
use crate::state::alert::{Alert, AlertState};

#[derive(Clone, Copy, Debug)]
pub struct SignalAlertActions {
    alerts: RwSignal<AlertState>,
}

impl SignalAlertActions {
    pub fn new(alerts: RwSignal<AlertState>) -> Self {
        Self { alerts }
    }
}

impl AlertActions for SignalAlertActions {
    fn add_alert(&self, alert: Alert) {
        self.alerts.update(|s| s.push(alert));
    }
}
