pub mod add_bar;
pub mod chart;
pub mod context_menu;
pub mod helpers;
pub mod ruler;
pub mod status_row;
pub mod task_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function. Rebuilds both panels from the plan every frame and
/// records the pane rects the mouse handlers hit-test against.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: add bar | ruler | content | status row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // add bar + palette
            Constraint::Length(1), // day ruler
            Constraint::Min(1),    // list | divider | chart
            Constraint::Length(1), // status row
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.list_width),
            Constraint::Length(1), // divider
            Constraint::Min(1),
        ])
        .split(rows[2]);

    app.panes.add_bar = rows[0];
    app.panes.ruler = Rect::new(content[2].x, rows[1].y, content[2].width, 1);
    app.panes.list = content[0];
    app.panes.divider = content[1];
    app.panes.chart = content[2];
    app.panes.status = rows[3];
    if app.menu.is_none() {
        app.panes.menu = Rect::default();
    }

    // A resize may have shrunk the viewport; pull scroll back into range.
    app.scroll_chart_to(app.chart_scroll);
    app.scroll_h_to(app.h_scroll);

    add_bar::render_add_bar(frame, app, rows[0]);
    ruler::render_ruler(frame, app, app.panes.ruler);
    task_list::render_task_list(frame, app, content[0]);
    render_divider(frame, app, content[1]);
    chart::render_chart(frame, app, content[2]);
    status_row::render_status_row(frame, app, rows[3]);

    // Context menu on top of everything
    if app.menu.is_some() {
        context_menu::render_context_menu(frame, app, area);
    }
}

fn render_divider(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("\u{2502}")).collect();
    let divider = Paragraph::new(Text::from(lines))
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(divider, area);
}
