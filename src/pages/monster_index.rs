//! Monster index page: entry point with a link to the add form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routing::{MONSTER_ADD, route_path};

#[component]
pub fn MonsterIndexPage() -> impl IntoView {
    let add_href = route_path(MONSTER_ADD, None).unwrap_or_else(|| "/".to_owned());

    view! {
        <Title text="Monsters"/>
        <section class="container margin-top-lg">
            <h1 class="nomargin-top">"Monsters"</h1>
            <a href=add_href class="btn btn-primary" title="Add Monster">
                <span class="fa fa-plus"></span>
                <span class="margin-left-sm">"Add Monster"</span>
            </a>
        </section>
    }
}
