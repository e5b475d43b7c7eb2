//! Global alert queue shown above every page.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use uuid::Uuid;

/// Visual category of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertCategory {
    Success,
    Error,
}

impl AlertCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
    pub category: AlertCategory,
}

impl Alert {
    pub fn new(message: impl Into<String>, category: AlertCategory) -> Self {
        Self { id: Uuid::new_v4(), message: message.into(), category }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertCategory::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, AlertCategory::Error)
    }
}

/// Alerts in arrival order.
#[derive(Clone, Debug, Default)]
pub struct AlertState {
    pub alerts: Vec<Alert>,
}

impl AlertState {
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// Remove the alert with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: Uuid) {
        self.alerts.retain(|a| a.id != id);
    }
}
