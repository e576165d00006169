//! List navigation and scrolling shared by the menu and pickers.

use crossterm::event::KeyEvent;

use crate::data::keybindings_data::NavigationBindings;
use crate::keybindings::KeybindingsConfig;

/// Calculate centered scroll offset for a list.
///
/// Keeps the selected item centered when possible, pinning to the top and
/// bottom of the list near its ends.
pub fn calculate_centered_scroll(
    selected_idx: usize,
    total_items: usize,
    visible_count: usize,
) -> usize {
    if total_items <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if selected_idx <= center {
        0
    } else if selected_idx >= total_items.saturating_sub(visible_count.saturating_sub(center)) {
        total_items.saturating_sub(visible_count)
    } else {
        selected_idx.saturating_sub(center)
    }
}

/// Move `selected` up or down according to the navigation bindings,
/// wrapping at both ends.
///
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(
    key: &KeyEvent,
    selected: &mut usize,
    total: usize,
    navigation: &NavigationBindings,
) -> bool {
    if total == 0 {
        return false;
    }

    if KeybindingsConfig::matches(key, &navigation.down) {
        *selected = (*selected + 1) % total;
        true
    } else if KeybindingsConfig::matches(key, &navigation.up) {
        *selected = if *selected == 0 {
            total - 1
        } else {
            *selected - 1
        };
        true
    } else {
        false
    }
}
