//! Named routes and the navigator used after a successful create.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use leptos_router::NavigateOptions;

use crate::state::monster::ItemId;

pub const MONSTER_INDEX: &str = "monster-index";
pub const MONSTER_ADD: &str = "monster-add";
pub const MONSTER_DETAIL: &str = "monster-detail";

/// Path for a named route. `monster-detail` needs an id; the others ignore it.
pub fn route_path(name: &str, id: Option<&ItemId>) -> Option<String> {
    match (name, id) {
        (MONSTER_INDEX, _) => Some("/monsters".to_owned()),
        (MONSTER_ADD, _) => Some("/monsters/add".to_owned()),
        (MONSTER_DETAIL, Some(id)) => Some(format!("/monsters/{id}")),
        _ => None,
    }
}

/// Route transition helper.
pub trait Navigator {
    fn transition_to(&self, route: &str, id: &ItemId);
}

/// Navigator over a `leptos_router` navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn transition_to(&self, route: &str, id: &ItemId) {
        match route_path(route, Some(id)) {
            Some(path) => (self.navigate)(&path, NavigateOptions::default()),
            None => log::warn!("no path for route {route:?}"),
        }
    }
}
