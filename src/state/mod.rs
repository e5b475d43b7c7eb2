//! Application state slices provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each slice lives in an `RwSignal` created by `app::App`. Pages read the
//! slices reactively and mutate them only through `actions`.

pub mod alert;
pub mod monster;
