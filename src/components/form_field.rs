//! Labeled text input with its inline validation message.

use leptos::prelude::*;

use crate::state::monster::FieldKey;

/// One add-form field. The input's id is the field's wire key; the group and
/// help line gain the `error` class while `error` holds a message.
#[component]
pub fn FormField(
    field: FieldKey,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_blur: Callback<FieldKey>,
    on_change: Callback<(FieldKey, String)>,
) -> impl IntoView {
    let id = field.as_str();
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="form-group" class:error=has_error>
            <label for=id>{field.label()}</label>
            <input
                type="text"
                id=id
                class="form-control"
                prop:value=move || value.get()
                on:blur=move |_| on_blur.run(field)
                on:input=move |ev| on_change.run((field, event_target_value(&ev)))
            />
            <div class="help" class:error=has_error>
                {move || error.get().map(|message| view! { <span>{message}</span> })}
            </div>
        </div>
    }
}
