//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls. They read shared state
//! from Leptos context providers or receive it as props, and report user
//! input through callbacks.

pub mod actions_bar;
pub mod alert_list;
pub mod form_field;
