//! List navigation utilities.

mod selectable_list;

pub use selectable_list::{calculate_centered_scroll, handle_list_navigation};
