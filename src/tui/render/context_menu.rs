use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::{App, MENU_ITEMS};

/// Render the right-click context menu and record its rect for the mouse
/// handlers. The popup is clamped to the frame so it never renders off
/// screen near the edges.
pub fn render_context_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(menu) = app.menu else {
        return;
    };

    let inner_width = MENU_ITEMS.iter().map(|item| item.len()).max().unwrap_or(0) as u16 + 2;
    let width = (inner_width + 2).min(area.width);
    let height = (MENU_ITEMS.len() as u16 + 2).min(area.height);
    let x = menu.x.min(area.x + area.width.saturating_sub(width));
    let y = menu.y.min(area.y + area.height.saturating_sub(height));
    let rect = Rect::new(x, y, width, height);
    app.panes.menu = rect;

    let bg = app.theme.menu_bg;
    let lines: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == menu.cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::styled(format!(" {item:w$} ", w = inner_width as usize - 2), style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
