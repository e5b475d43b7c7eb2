//! Navigation bar shown above Monster pages.

use leptos::prelude::*;

use crate::routing::{MONSTER_INDEX, route_path};

/// Static "Back to list" link to the Monster index.
#[component]
pub fn ActionsBar() -> impl IntoView {
    let href = route_path(MONSTER_INDEX, None).unwrap_or_else(|| "/".to_owned());

    view! {
        <div class="actions">
            <div class="container">
                <div class="btn-group btn-group-sm pull-left">
                    <a href=href class="btn btn-gray-light" title="Back to list">
                        <span class="fa fa-arrow-left"></span>
                        <span class="hidden-xs margin-left-sm">"Back to list"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
