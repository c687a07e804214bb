use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::plan_ops;
use crate::tui::app::{App, MENU_ITEMS, Mode};

/// Keys while the context menu is open.
pub fn handle_menu(app: &mut App, key: KeyEvent) {
    let Some(menu) = app.menu else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => app.close_menu(),
        KeyCode::Up => {
            if let Some(m) = app.menu.as_mut() {
                m.cursor = m.cursor.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
            }
        }
        KeyCode::Down => {
            if let Some(m) = app.menu.as_mut() {
                m.cursor = (m.cursor + 1) % MENU_ITEMS.len();
            }
        }
        KeyCode::Enter => {
            app.close_menu();
            apply_menu_item(app, menu.index, menu.cursor);
        }
        _ => {}
    }
}

/// Perform a context-menu action against the row the menu was opened on.
/// The index was captured at open time; the plan cannot have changed since
/// (the menu is modal), so it is still valid.
pub fn apply_menu_item(app: &mut App, index: usize, item: usize) {
    match MENU_ITEMS.get(item).copied() {
        Some("Delete") => {
            if plan_ops::remove_task(&mut app.plan, index).is_some() {
                app.persist();
            }
        }
        Some("Rename") => app.begin_edit(index),
        _ => {}
    }
}
