//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_list::AlertList;
use crate::config::ClientConfig;
use crate::pages::{monster_add::MonsterAddPage, monster_detail::MonsterDetailPage, monster_index::MonsterIndexPage};
use crate::state::{alert::AlertState, monster::MonsterState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store slices and client configuration, then sets up
/// client-side routing for the Monster pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(MonsterState::default()));
    provide_context(RwSignal::new(AlertState::default()));
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/monster-admin.css"/>
        <Title text="Monster Admin"/>

        <Router>
            <AlertList/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=MonsterIndexPage/>
                    <Route path=StaticSegment("monsters") view=MonsterIndexPage/>
                    <Route path=(StaticSegment("monsters"), StaticSegment("add")) view=MonsterAddPage/>
                    <Route path=(StaticSegment("monsters"), ParamSegment("id")) view=MonsterDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
