//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timing and task plumbing from page logic so the
//! form controller can be driven from unit tests without a browser.

pub mod debounce;

use debounce::LocalTask;

/// Hand a fire-and-forget task to the browser executor. Server renders never
/// run event handlers, so there the task is dropped.
pub fn spawn_task(task: LocalTask) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
