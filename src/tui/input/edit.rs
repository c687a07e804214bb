use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};

/// Keys while an inline rename session is live. Enter commits, Escape
/// cancels; everything that would otherwise hit a global shortcut is
/// swallowed here so editing can't mutate other tasks.
pub fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            return;
        }
        KeyCode::Esc => {
            app.cancel_edit();
            return;
        }
        _ => {}
    }

    let Some(session) = app.edit.as_mut() else {
        // Stale mode without a session; drop back to navigation.
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Left => session.cursor = prev_boundary(&session.buffer, session.cursor),
        KeyCode::Right => session.cursor = next_boundary(&session.buffer, session.cursor),
        KeyCode::Home => session.cursor = 0,
        KeyCode::End => session.cursor = session.buffer.len(),
        KeyCode::Backspace => {
            if session.cursor > 0 {
                let from = prev_boundary(&session.buffer, session.cursor);
                session.buffer.replace_range(from..session.cursor, "");
                session.cursor = from;
            }
        }
        KeyCode::Delete => {
            if session.cursor < session.buffer.len() {
                let to = next_boundary(&session.buffer, session.cursor);
                session.buffer.replace_range(session.cursor..to, "");
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.buffer.insert(session.cursor, c);
            session.cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Byte offset of the grapheme boundary before `at`.
pub(crate) fn prev_boundary(s: &str, at: usize) -> usize {
    s.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < at)
        .last()
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `at`.
pub(crate) fn next_boundary(s: &str, at: usize) -> usize {
    s.grapheme_indices(true)
        .map(|(i, g)| i + g.len())
        .find(|&end| end > at)
        .unwrap_or(s.len())
}
