use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::model::task::DAYS_TOTAL;
use crate::tui::app::App;

/// Render the numbered day ruler over the chart. It reads the same
/// horizontal offset as the chart, which keeps the two aligned.
pub fn render_ruler(frame: &mut Frame, app: &App, area: Rect) {
    let text = ruler_window(app.h_scroll, area.width as usize, app.day_width as usize);
    let ruler = Paragraph::new(text)
        .style(Style::default().fg(app.theme.ruler).bg(app.theme.background));
    frame.render_widget(ruler, area);
}

/// The visible slice of the ruler strip: day numbers 1..=DAYS_TOTAL, each
/// left-aligned in a `day_width`-cell slot.
fn ruler_window(offset: usize, width: usize, day_width: usize) -> String {
    let day_width = day_width.max(1);
    let first_day = offset / day_width;
    let mut strip = String::new();
    let mut day = first_day;
    while strip.len() < offset - first_day * day_width + width && day < DAYS_TOTAL as usize {
        let label = (day + 1).to_string();
        let mut slot = label;
        slot.truncate(day_width);
        while slot.len() < day_width {
            slot.push(' ');
        }
        strip.push_str(&slot);
        day += 1;
    }
    let skip = offset - first_day * day_width;
    strip
        .chars()
        .skip(skip)
        .take(width)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_day_one() {
        assert_eq!(ruler_window(0, 12, 4), "1   2   3   ");
    }

    #[test]
    fn window_slices_mid_slot() {
        // offset 2 cuts into day 1's slot
        assert_eq!(ruler_window(2, 8, 4), "  2   3 ");
    }

    #[test]
    fn later_days_show_full_numbers() {
        let window = ruler_window(100 * 4, 8, 4);
        assert_eq!(window, "101 102 ");
    }

    #[test]
    fn stops_at_the_horizon() {
        let offset = (DAYS_TOTAL as usize - 1) * 4;
        let window = ruler_window(offset, 12, 4);
        assert_eq!(window, "666 ");
    }
}
