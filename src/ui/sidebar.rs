//! Static sidebar.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use super::theme::Palette;

pub const SIDEBAR_TITLE: &str = "Our Sidebar";

pub const SIDEBAR_ITEMS: [&str; 4] = ["Latest Posts", "Announcements", "Calendars", "etc"];

/// Rows the sidebar needs: borders, items and the dividers between them.
pub fn sidebar_height() -> u16 {
    2 + (SIDEBAR_ITEMS.len() as u16 * 2 - 1)
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let divider_width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::with_capacity(SIDEBAR_ITEMS.len() * 2);
    for (index, item) in SIDEBAR_ITEMS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(Span::styled(
                "─".repeat(divider_width),
                palette.border(),
            )));
        }
        lines.push(Line::from(*item));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .title(Span::styled(format!(" {} ", SIDEBAR_TITLE), palette.heading()))
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
