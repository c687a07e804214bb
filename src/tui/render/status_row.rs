use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::DAYS_TOTAL;
use crate::tui::app::{App, Mode};
use crate::tui::render::helpers::display_width;

/// One-line status row: key hints for the current mode on the left, a
/// plan summary on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        Mode::Navigate => "a add  r rename  d delete  \u{2190}\u{2192} resize  \u{2191}\u{2193} select  q quit",
        Mode::AddInput => "enter add  \u{2190}\u{2192} color  esc done",
        Mode::Edit => "enter save  esc cancel",
        Mode::Menu => "enter run  esc close",
    };
    let summary = format!("{} tasks \u{00B7} horizon {}d", app.plan.len(), DAYS_TOTAL);

    let width = area.width as usize;
    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )];
    let used = display_width(&format!(" {hints}"));
    let tail = display_width(&summary) + 1;
    if used + tail < width {
        spans.push(Span::styled(
            " ".repeat(width - used - tail),
            Style::default().bg(app.theme.background),
        ));
        spans.push(Span::styled(
            format!("{summary} "),
            Style::default().fg(app.theme.text).bg(app.theme.background),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background));
    frame.render_widget(status, area);
}
