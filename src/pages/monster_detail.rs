//! Monster detail page for the record created most recently.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::actions_bar::ActionsBar;
use crate::state::monster::{ItemId, Monster, MonsterState};

/// Shows `current_item` when its id matches the route; anything else is
/// reported as not found.
#[component]
pub fn MonsterDetailPage() -> impl IntoView {
    let monsters = expect_context::<RwSignal<MonsterState>>();
    let params = use_params_map();

    let item = move || {
        let id = params.with(|p| p.get("id")).map(|raw| ItemId::from_param(&raw))?;
        monsters.with(|s| s.current_item.clone().filter(|m| m.id == id))
    };

    view! {
        <Title text="Monster"/>
        <div>
            <ActionsBar/>
            <section class="container margin-top-lg">
                {move || match item() {
                    Some(monster) => render_monster(monster).into_any(),
                    None => view! { <h1 class="nomargin-top">"Monster not found"</h1> }.into_any(),
                }}
            </section>
        </div>
    }
}

fn render_monster(monster: Monster) -> impl IntoView {
    view! {
        <h1 class="nomargin-top">{monster.name.clone()}</h1>
        <dl>
            <dt>"Id"</dt>
            <dd>{monster.id.to_string()}</dd>
            <dt>"Citizenship"</dt>
            <dd>{monster.citizenship}</dd>
            <dt>"Birth Date"</dt>
            <dd>{monster.birth_date}</dd>
        </dl>
    }
}
