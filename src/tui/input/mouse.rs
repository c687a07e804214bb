//! Mouse handling: panel hit-testing against the rects captured during the
//! last render, plus the modal drag-session lifecycle (press → drag events →
//! release). At most one drag session exists; a press is refused while a
//! rename session is live, and a right-click is refused mid-drag.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::model::task::TaskColor;
use crate::ops::plan_ops;
use crate::tui::app::{App, LIST_WIDTH_MAX, LIST_WIDTH_MIN, MENU_ITEMS, Mode};
use crate::tui::drag::{self, DragKind, DragSession};
use crate::tui::render::add_bar::SWATCH_STRIDE;

use super::menu::apply_menu_item;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_left_press(app, mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Right) => on_right_press(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(app, mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => on_release(app),
        MouseEventKind::ScrollUp => on_vertical_scroll(app, mouse.column, mouse.row, -1),
        MouseEventKind::ScrollDown => on_vertical_scroll(app, mouse.column, mouse.row, 1),
        MouseEventKind::ScrollLeft => {
            app.scroll_h_to(app.h_scroll.saturating_sub(app.day_width as usize));
        }
        MouseEventKind::ScrollRight => {
            app.scroll_h_to(app.h_scroll + app.day_width as usize);
        }
        _ => {}
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Map a screen row in `pane` (scrolled by `offset`) to a task index.
fn row_at(pane: Rect, offset: usize, len: usize, y: u16) -> Option<usize> {
    if y < pane.y || y >= pane.y + pane.height {
        return None;
    }
    let row = (y - pane.y) as usize + offset;
    (row < len).then_some(row)
}

fn on_left_press(app: &mut App, x: u16, y: u16) {
    // Open menu: a click inside runs that row's action, anywhere else
    // dismisses it (and the press does nothing further).
    if let Some(menu) = app.menu {
        let rect = app.panes.menu;
        app.close_menu();
        if point_in_rect(x, y, rect) && x > rect.x && x < rect.x + rect.width - 1 {
            let item = (y - rect.y) as usize;
            if item >= 1 && item <= MENU_ITEMS.len() {
                apply_menu_item(app, menu.index, item - 1);
            }
        }
        return;
    }

    // A press outside the edited row blurs the field, which commits it.
    // The press is consumed either way; it never doubles as a drag start.
    if let Some(session) = &app.edit {
        let index = session.index;
        let on_edit_row = row_at(app.panes.chart, app.chart_scroll, app.plan.len(), y)
            == Some(index)
            || row_at(app.panes.list, app.list_scroll, app.plan.len(), y) == Some(index);
        if !on_edit_row {
            app.commit_edit();
        }
        return;
    }

    if app.mode == Mode::AddInput && !point_in_rect(x, y, app.panes.add_bar) {
        app.mode = Mode::Navigate;
    }

    if point_in_rect(x, y, app.panes.add_bar) {
        app.mode = Mode::AddInput;
        if point_in_rect(x, y, app.panes.palette) {
            let index = ((x - app.panes.palette.x) / SWATCH_STRIDE) as usize;
            if let Some(color) = TaskColor::ALL.get(index) {
                app.current_color = *color;
            }
        }
        return;
    }

    if point_in_rect(x, y, app.panes.divider) {
        app.divider_drag = true;
        return;
    }

    if point_in_rect(x, y, app.panes.chart) {
        on_chart_press(app, x, y);
        return;
    }

    if point_in_rect(x, y, app.panes.list)
        && let Some(row) = row_at(app.panes.list, app.list_scroll, app.plan.len(), y)
    {
        app.plan.select(row as isize);
    }
}

/// A left press on a bar selects its row and opens a drag session: the
/// trailing handle cell resizes, the body moves.
fn on_chart_press(app: &mut App, x: u16, y: u16) {
    if app.drag.is_some() {
        return;
    }
    let Some(index) = row_at(app.panes.chart, app.chart_scroll, app.plan.len(), y) else {
        return;
    };
    let Some(task) = app.plan.get(index) else {
        return;
    };

    let day_width = app.day_width as usize;
    let col = (x - app.panes.chart.x) as usize + app.h_scroll;
    let left = task.start as usize * day_width;
    let right = left + task.duration as usize * day_width;
    if col < left || col >= right {
        return;
    }

    let kind = if col == right - 1 {
        DragKind::Resize
    } else {
        DragKind::Move
    };
    let session = DragSession {
        kind,
        index,
        origin_col: col as i64,
        pre_start: task.start,
        pre_duration: task.duration,
    };
    app.plan.select(index as isize);
    app.drag = Some(session);
}

/// Right-click on a bar opens the context menu on that row. Refused while
/// a drag is live, so a drag release can't pop the menu.
fn on_right_press(app: &mut App, x: u16, y: u16) {
    if app.drag.is_some() || app.edit.is_some() {
        return;
    }
    if !point_in_rect(x, y, app.panes.chart) {
        return;
    }
    let Some(index) = row_at(app.panes.chart, app.chart_scroll, app.plan.len(), y) else {
        return;
    };
    let Some(task) = app.plan.get(index) else {
        return;
    };
    let day_width = app.day_width as usize;
    let col = (x - app.panes.chart.x) as usize + app.h_scroll;
    let left = task.start as usize * day_width;
    let right = left + task.duration as usize * day_width;
    if col < left || col >= right {
        return;
    }
    app.plan.select(index as isize);
    app.open_menu(index, x, y);
}

fn on_drag(app: &mut App, x: u16, y: u16) {
    let _ = y;

    if app.divider_drag {
        let offset = x.saturating_sub(app.panes.list.x);
        app.list_width = offset.clamp(LIST_WIDTH_MIN, LIST_WIDTH_MAX);
        return;
    }

    let Some(session) = app.drag else {
        return;
    };

    // Clamp the pointer into the chart horizontally; dragging past the
    // pane edge behaves like holding at the edge.
    let chart = app.panes.chart;
    let x = x.clamp(chart.x, chart.x + chart.width.saturating_sub(1));
    let col = (x - chart.x) as i64 + app.h_scroll as i64;
    let delta = session.delta(col);

    // Hot path: mutate the model only; the next frame redraws the one bar.
    match session.kind {
        DragKind::Move => {
            let start =
                drag::moved_start(session.pre_start, session.pre_duration, delta, app.day_width);
            plan_ops::set_start(&mut app.plan, session.index, start);
        }
        DragKind::Resize => {
            let duration = drag::resized_duration(
                session.pre_duration,
                session.pre_start,
                delta,
                app.day_width,
            );
            plan_ops::set_duration(&mut app.plan, session.index, duration);
        }
    }
}

/// Pointer release always ends the sessions the press opened; a completed
/// bar drag persists its final position.
fn on_release(app: &mut App) {
    app.divider_drag = false;
    if app.drag.take().is_some() {
        app.persist();
    }
}

fn on_vertical_scroll(app: &mut App, x: u16, y: u16, delta: isize) {
    let step = |offset: usize| {
        if delta < 0 {
            offset.saturating_sub(1)
        } else {
            offset + 1
        }
    };
    // Scrolling either panel mirrors the other; each assignment runs once
    // per event, so the sync cannot feed back on itself.
    if point_in_rect(x, y, app.panes.list) {
        app.scroll_list_to(step(app.list_scroll));
    } else if point_in_rect(x, y, app.panes.chart) {
        app.scroll_chart_to(step(app.chart_scroll));
    }
}
