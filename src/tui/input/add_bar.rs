use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::task::TaskColor;
use crate::ops::plan_ops;
use crate::tui::app::{App, Mode};

/// Keys while the add-task input is focused. Left/Right are taken by the
/// palette (cycling the current swatch), so the input itself is append-only.
pub fn handle_add_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            plan_ops::add_task(&mut app.plan, &app.add_input, app.current_color);
            app.add_input.clear();
            app.persist();
            app.ensure_selection_visible();
            // focus stays in the input, ready for the next task
        }
        KeyCode::Esc | KeyCode::Tab => app.mode = Mode::Navigate,
        KeyCode::Right => cycle_color(app, 1),
        KeyCode::Left => cycle_color(app, -1),
        KeyCode::Backspace => {
            let truncate_to = app
                .add_input
                .grapheme_indices(true)
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            app.add_input.truncate(truncate_to);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.add_input.push(c);
        }
        _ => {}
    }
}

/// Step the current swatch through the palette, wrapping at both ends.
pub fn cycle_color(app: &mut App, delta: i32) {
    let n = TaskColor::ALL.len() as i32;
    let index = app.current_color.palette_index() as i32;
    let index = (index + delta).rem_euclid(n);
    app.current_color = TaskColor::ALL[index as usize];
}
