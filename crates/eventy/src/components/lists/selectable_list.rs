//! List navigation and scrolling utilities shared by the browse screens.

use crossterm::event::{KeyCode, KeyEvent};

/// Calculate centered scroll offset for a list.
///
/// Keeps the selected item centered when possible, pinning to the edges near
/// the beginning and end of the list.
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

/// Handle j/k or Up/Down list navigation with wrapping.
///
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(key: &KeyEvent, selected: &mut usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = if *selected == 0 {
                total - 1
            } else {
                *selected - 1
            };
            true
        }
        KeyCode::Home => {
            *selected = 0;
            true
        }
        KeyCode::End => {
            *selected = total - 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut selected = 0;
        assert!(handle_list_navigation(
            &KeyEvent::from(KeyCode::Char('k')),
            &mut selected,
            3
        ));
        assert_eq!(selected, 2);
        assert!(handle_list_navigation(
            &KeyEvent::from(KeyCode::Char('j')),
            &mut selected,
            3
        ));
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_navigation_ignores_empty_list() {
        let mut selected = 0;
        assert!(!handle_list_navigation(
            &KeyEvent::from(KeyCode::Char('j')),
            &mut selected,
            0
        ));
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_centered_scroll_pins_to_edges() {
        assert_eq!(calculate_centered_scroll(0, 20, 5), 0);
        assert_eq!(calculate_centered_scroll(10, 20, 5), 8);
        assert_eq!(calculate_centered_scroll(19, 20, 5), 15);
        assert_eq!(calculate_centered_scroll(3, 4, 10), 0);
    }
}
