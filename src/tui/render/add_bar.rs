use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::TaskColor;
use crate::tui::app::{App, Mode};
use crate::tui::render::helpers::display_width;

/// Cells per palette swatch (marker + two block cells).
pub const SWATCH_STRIDE: u16 = 3;

/// Render the top bar: the add-task input on the left, the palette of
/// color swatches on the right. Clicking the bar (or `a`) focuses the
/// input; Left/Right then cycle the current swatch.
pub fn render_add_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.mode == Mode::AddInput;
    let bg = app.theme.background;

    let palette_width = SWATCH_STRIDE * TaskColor::ALL.len() as u16;
    let palette_x = area.x + area.width.saturating_sub(palette_width + 1);
    app.panes.palette = Rect::new(palette_x, area.y, palette_width, 1);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        " + ",
        Style::default()
            .fg(if focused { app.theme.highlight } else { app.theme.dim })
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    if app.add_input.is_empty() && !focused {
        spans.push(Span::styled(
            "new task\u{2026}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            app.add_input.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        if focused {
            // block cursor at the end of the input
            spans.push(Span::styled(
                " ",
                Style::default().bg(bg).add_modifier(Modifier::REVERSED),
            ));
        }
    }

    // pad the gap up to the palette
    let used: usize = spans.iter().map(|s| display_width(s.content.as_ref())).sum();
    let gap = (palette_x - area.x) as usize;
    if used < gap {
        spans.push(Span::styled(" ".repeat(gap - used), Style::default().bg(bg)));
    }

    for color in TaskColor::ALL {
        let is_current = color == app.current_color;
        spans.push(Span::styled(
            if is_current { "\u{25B8}" } else { " " },
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{2588}\u{2588}",
            Style::default().fg(app.theme.swatch_color(color)).bg(bg),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(bar, area);
}
