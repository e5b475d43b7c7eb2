//! Add-Monster page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the form from the `MonsterState` snapshot and forwards every
//! input, blur and button click to `AddFormController`. Submission alerts
//! land in the global `AlertState`; success moves to the detail route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::monster_add_form::{AddFormController, submit_disabled};
use crate::actions::alert::SignalAlertActions;
use crate::actions::monster::SignalMonsterActions;
use crate::components::actions_bar::ActionsBar;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::routing::RouterNavigator;
use crate::state::alert::AlertState;
use crate::state::monster::{FieldKey, MonsterState};
use crate::util::debounce::{BrowserSleeper, Debouncer};
use crate::util::spawn_task;

#[component]
pub fn MonsterAddPage() -> impl IntoView {
    let monsters = expect_context::<RwSignal<MonsterState>>();
    let alerts = expect_context::<RwSignal<AlertState>>();
    let config = expect_context::<ClientConfig>();

    let controller = StoredValue::new_local(AddFormController::new(
        SignalMonsterActions::new(monsters, config.api_base.clone()),
        SignalAlertActions::new(alerts),
        RouterNavigator::new(use_navigate()),
        BrowserSleeper,
        Debouncer::new(config.validate_debounce, config.debounce_scope),
    ));

    let on_blur = Callback::new(move |key: FieldKey| {
        controller.with_value(|c| spawn_task(c.handle_blur(key)));
    });
    let on_change = Callback::new(move |(key, value): (FieldKey, String)| {
        controller.with_value(|c| spawn_task(c.handle_change(key, value)));
    });
    let on_reset = move |_| controller.with_value(|c| c.handle_reset());
    let on_submit = move |_| {
        let c = controller.get_value();
        spawn_task(Box::pin(async move {
            let _ = c.handle_submit().await;
        }));
    };

    let fields = FieldKey::ALL
        .into_iter()
        .map(|key| {
            let value = Signal::derive(move || monsters.with(|s| s.add_form.get(key).to_owned()));
            let error =
                Signal::derive(move || monsters.with(|s| s.add_form_errors.message(key.as_str()).map(str::to_owned)));
            view! { <FormField field=key value=value error=error on_blur=on_blur on_change=on_change/> }
        })
        .collect_view();

    view! {
        <Title text="Add Monster"/>
        <div>
            <ActionsBar/>
            <section class="container margin-top-lg">
                <div class="row">
                    <div class="col-xs-12 col-sm-9">
                        <h1 class="nomargin-top">"Add Monster"</h1>
                        <fieldset>{fields}</fieldset>
                        <div class="btn-group">
                            <button class="btn btn-default" type="button" on:click=on_reset>
                                "Reset"
                            </button>
                            <button
                                class="btn btn-primary"
                                type="button"
                                on:click=on_submit
                                disabled=move || monsters.with(|s| submit_disabled(&s.add_form_errors))
                            >
                                "Submit"
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
