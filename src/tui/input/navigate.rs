use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::plan_ops;
use crate::tui::app::{App, Mode};

pub fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('a') | KeyCode::Char('n') => app.mode = Mode::AddInput,

        KeyCode::Char('r') | KeyCode::F(2) => {
            if let Some(selected) = app.plan.selected() {
                app.begin_edit(selected);
            }
        }

        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(selected) = app.plan.selected()
                && plan_ops::remove_task(&mut app.plan, selected).is_some()
            {
                app.persist();
            }
        }

        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::Right => adjust_selected_duration(app, 1),
        KeyCode::Left => adjust_selected_duration(app, -1),

        KeyCode::Char('[') => {
            app.scroll_h_to(app.h_scroll.saturating_sub(app.day_width as usize));
        }
        KeyCode::Char(']') => {
            app.scroll_h_to(app.h_scroll + app.day_width as usize);
        }
        KeyCode::Home => app.scroll_h_to(0),

        KeyCode::PageUp => {
            let page = (app.panes.chart.height as usize).max(1);
            app.scroll_chart_to(app.chart_scroll.saturating_sub(page));
        }
        KeyCode::PageDown => {
            let page = (app.panes.chart.height as usize).max(1);
            app.scroll_chart_to(app.chart_scroll + page);
        }

        _ => {}
    }
}

/// Up/Down move the selection cyclically. With nothing selected yet, Down
/// picks the first row and Up the last.
fn move_selection(app: &mut App, delta: isize) {
    if app.plan.is_empty() {
        return;
    }
    match app.plan.selected() {
        Some(selected) => app.plan.select(selected as isize + delta),
        None => app.plan.select(if delta < 0 { -1 } else { 0 }),
    }
    app.ensure_selection_visible();
}

/// Left/Right shrink/grow the selected task by one day, within bounds.
fn adjust_selected_duration(app: &mut App, delta: i32) {
    let Some(selected) = app.plan.selected() else {
        return;
    };
    let before = app.plan.get(selected).map(|t| t.duration);
    plan_ops::adjust_duration(&mut app.plan, selected, delta);
    if app.plan.get(selected).map(|t| t.duration) != before {
        app.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::plan::Plan;
    use crate::model::task::{DAYS_TOTAL, TaskColor};
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(names: &[&str]) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("tasks.json"));
        let mut plan = Plan::default();
        for name in names {
            plan_ops::add_task(&mut plan, name, TaskColor::Green);
        }
        (App::new(plan, store), dir)
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let (mut app, _dir) = app_with(&["a", "b", "c"]);
        app.plan.select(0);
        handle_navigate(&mut app, key(KeyCode::Up));
        assert_eq!(app.plan.selected(), Some(2));
    }

    #[test]
    fn down_from_last_wraps_to_first() {
        let (mut app, _dir) = app_with(&["a", "b", "c"]);
        app.plan.select(2);
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.plan.selected(), Some(0));
    }

    #[test]
    fn right_grows_duration_and_persists() {
        let (mut app, _dir) = app_with(&["a"]);
        app.plan.select(0);
        handle_navigate(&mut app, key(KeyCode::Right));
        assert_eq!(app.plan.get(0).unwrap().duration, 6);
        assert_eq!(app.store.load()[0].duration, 6);
    }

    #[test]
    fn left_at_one_day_is_a_noop() {
        let (mut app, _dir) = app_with(&["a"]);
        app.plan.select(0);
        plan_ops::set_duration(&mut app.plan, 0, 1);
        handle_navigate(&mut app, key(KeyCode::Left));
        assert_eq!(app.plan.get(0).unwrap().duration, 1);
    }

    #[test]
    fn right_at_horizon_is_a_noop() {
        let (mut app, _dir) = app_with(&["a"]);
        app.plan.select(0);
        plan_ops::set_start(&mut app.plan, 0, DAYS_TOTAL - 5);
        handle_navigate(&mut app, key(KeyCode::Right));
        assert_eq!(app.plan.get(0).unwrap().duration, 5);
    }

    #[test]
    fn delete_removes_selected_and_clamps() {
        let (mut app, _dir) = app_with(&["a", "b"]);
        app.plan.select(1);
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.plan.len(), 1);
        assert_eq!(app.plan.selected(), Some(0));
    }

    #[test]
    fn duration_keys_without_selection_do_nothing() {
        let (mut app, _dir) = app_with(&["a"]);
        app.plan.clear_selection();
        handle_navigate(&mut app, key(KeyCode::Right));
        assert_eq!(app.plan.get(0).unwrap().duration, 5);
    }
}
