use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::render::helpers::{display_width, fit_to_width};

/// Render the task-name panel: one row per task, same row index as the
/// chart, selection highlighted identically to the chart's.
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..area.height as usize {
        let index = app.list_scroll + row;
        let Some(task) = app.plan.get(index) else {
            break;
        };
        let is_selected = app.plan.selected() == Some(index);
        let bg = if is_selected {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let name_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(
                "\u{25CF} ",
                Style::default().fg(app.theme.swatch_color(task.color)).bg(bg),
            ),
        ];
        let name = fit_to_width(&task.name, width.saturating_sub(4));
        spans.push(Span::styled(name.clone(), name_style));
        // fill to the panel edge so the selection bar spans the row
        let used = 3 + display_width(&name);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(list, area);
}
