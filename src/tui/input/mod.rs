mod add_bar;
mod edit;
mod menu;
pub mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

pub use add_bar::cycle_color;
pub use menu::apply_menu_item;

/// Handle a key event in the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Ctrl-C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::AddInput => add_bar::handle_add_input(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Menu => menu::handle_menu(app, key),
    }
}
