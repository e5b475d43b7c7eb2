//! Global alert list rendered above the routed page.

#[cfg(test)]
#[path = "alert_list_test.rs"]
mod alert_list_test;

use leptos::prelude::*;

use crate::state::alert::{Alert, AlertCategory, AlertState};

fn alert_class(category: AlertCategory) -> &'static str {
    match category {
        AlertCategory::Success => "alert alert-success",
        AlertCategory::Error => "alert alert-danger",
    }
}

/// Renders every queued alert with a dismiss button.
#[component]
pub fn AlertList() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();

    view! {
        <div class="alerts container">
            <For
                each=move || alerts.get().alerts
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let id = alert.id;
                    view! {
                        <div class=alert_class(alert.category) role="alert">
                            <button
                                class="close"
                                type="button"
                                title="Dismiss"
                                on:click=move |_| alerts.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                            <span>{alert.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
