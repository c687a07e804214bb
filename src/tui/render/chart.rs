use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::model::task::Task;
use crate::tui::app::{App, Mode};
use crate::tui::render::helpers::{clip_segments, display_width, fit_to_width};

/// Render the chart panel: one bar per task on a virtual strip
/// `DAYS_TOTAL * day_width` cells wide, clipped to the visible window.
pub fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let strip_end = app.h_scroll + width;
    let day_width = app.day_width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..area.height as usize {
        let index = app.chart_scroll + row;
        let Some(task) = app.plan.get(index) else {
            break;
        };
        let is_selected = app.plan.selected() == Some(index);
        let row_bg = if is_selected {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let live_edit = app
            .edit
            .as_ref()
            .filter(|session| app.mode == Mode::Edit && session.index == index);
        let segments = match live_edit {
            Some(session) => edit_row(
                app,
                task,
                &session.buffer,
                session.cursor,
                day_width,
                row_bg,
                strip_end,
            ),
            None => bar_row(app, task, is_selected, day_width, row_bg, strip_end),
        };

        lines.push(Line::from(clip_segments(&segments, app.h_scroll, width)));
    }

    let chart = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(chart, area);
}

/// Segments for a normal row: gap, label, resize handle, trailing gap.
fn bar_row(
    app: &App,
    task: &Task,
    is_selected: bool,
    day_width: usize,
    row_bg: ratatui::style::Color,
    strip_end: usize,
) -> Vec<(String, Style)> {
    let left = task.start as usize * day_width;
    let bar_width = (task.duration as usize * day_width).max(1);
    let gap_style = Style::default().bg(row_bg);
    let bar_bg = app.theme.swatch_color(task.color);

    let mut label_style = Style::default().fg(app.theme.background).bg(bar_bg);
    if is_selected {
        label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let mut segments = vec![(" ".repeat(left), gap_style)];
    if bar_width > 1 {
        let mut label = fit_to_width(&task.name, bar_width - 1);
        while display_width(&label) < bar_width - 1 {
            label.push(' ');
        }
        segments.push((label, label_style));
    }
    // resize handle in the bar's last cell
    segments.push((
        "\u{2590}".to_string(),
        Style::default().fg(app.theme.background).bg(bar_bg),
    ));

    let right = left + bar_width;
    if right < strip_end {
        segments.push((" ".repeat(strip_end - right), gap_style));
    }
    segments
}

/// Segments for the row under inline rename: the buffer drawn over the bar
/// with a block cursor, widening past the bar when the text outgrows it.
fn edit_row(
    app: &App,
    task: &Task,
    buffer: &str,
    cursor: usize,
    day_width: usize,
    row_bg: ratatui::style::Color,
    strip_end: usize,
) -> Vec<(String, Style)> {
    let left = task.start as usize * day_width;
    let bar_width = (task.duration as usize * day_width).max(1);
    let gap_style = Style::default().bg(row_bg);
    let bar_bg = app.theme.swatch_color(task.color);
    let text_style = Style::default().fg(app.theme.background).bg(bar_bg);
    let cursor_style = text_style.add_modifier(Modifier::REVERSED);

    let before = &buffer[..cursor];
    let mut rest = buffer[cursor..].graphemes(true);
    let under_cursor = rest.next().unwrap_or(" ").to_string();
    let after: String = rest.collect();

    let mut segments = vec![
        (" ".repeat(left), gap_style),
        (before.to_string(), text_style),
        (under_cursor, cursor_style),
        (after, text_style),
    ];

    // pad out to the bar's footprint if the text is narrower than the bar
    let text_width: usize = segments[1..]
        .iter()
        .map(|(text, _)| display_width(text))
        .sum();
    if text_width < bar_width {
        segments.push((" ".repeat(bar_width - text_width), text_style));
    }

    let right = left + text_width.max(bar_width);
    if right < strip_end {
        segments.push((" ".repeat(strip_end - right), gap_style));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::plan::Plan;
    use crate::model::task::{Task, TaskColor};

    fn task(name: &str, start: u32, duration: u32, color: TaskColor) -> Task {
        Task {
            name: name.into(),
            start,
            duration,
            color,
        }
    }

    fn app_with(tasks: Vec<Task>) -> App {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("tasks.json"));
        let mut app = App::new(Plan::new(tasks), store);
        app.day_width = 4;
        app
    }

    fn row_text(segments: &[(String, Style)]) -> String {
        segments.iter().map(|(text, _)| text.as_str()).collect()
    }

    #[test]
    fn bar_sits_at_start_times_day_width() {
        let app = app_with(vec![task("Ship", 3, 2, TaskColor::Blue)]);
        let task = app.plan.get(0).unwrap();
        let segments = bar_row(&app, task, false, 4, app.theme.background, 40);
        let text: Vec<char> = row_text(&segments).chars().collect();
        // 12 cells of gap, 7 cells of label, 1 handle cell, gap to 40
        assert!(text[..12].iter().all(|&c| c == ' '));
        assert_eq!(text[12..19].iter().collect::<String>(), "Ship   ");
        assert_eq!(text[19], '\u{2590}');
        assert_eq!(text.len(), 40);
    }

    #[test]
    fn label_is_clipped_to_the_bar() {
        let app = app_with(vec![task("A very long task name", 0, 1, TaskColor::Green)]);
        let task = app.plan.get(0).unwrap();
        let segments = bar_row(&app, task, false, 4, app.theme.background, 20);
        let text: String = row_text(&segments).chars().take(4).collect();
        assert_eq!(text, "A v\u{2590}");
    }

    #[test]
    fn edit_row_grows_past_the_bar() {
        let app = app_with(vec![task("Hi", 0, 1, TaskColor::Green)]);
        let task = app.plan.get(0).unwrap();
        let buffer = "A longer name";
        let segments = edit_row(&app, task, buffer, buffer.len(), 4, app.theme.background, 40);
        let text = row_text(&segments);
        // buffer (13) + end-of-line cursor cell (1) then gap
        assert_eq!(&text[..14], "A longer name ");
        assert_eq!(text.chars().count(), 40);
    }

    #[test]
    fn edit_cursor_cell_is_reversed() {
        let app = app_with(vec![task("Hi", 0, 2, TaskColor::Green)]);
        let task = app.plan.get(0).unwrap();
        let segments = edit_row(&app, task, "Hi", 1, 4, app.theme.background, 20);
        // segments: gap, "H", "i" (cursor), "", pad, trailing gap
        assert_eq!(segments[1].0, "H");
        assert_eq!(segments[2].0, "i");
        assert!(segments[2].1.add_modifier.contains(Modifier::REVERSED));
    }
}
