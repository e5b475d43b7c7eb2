//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod monster_add;
pub mod monster_add_form;
pub mod monster_detail;
pub mod monster_index;
