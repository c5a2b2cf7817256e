//! Top navigation bar.
//!
//! Brand and Home on the left; theme toggle, Login and Register on the
//! right. Login and Register are placeholders with no behaviour.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::settings::Settings;

pub const BRAND: &str = "FastAPI Blog";

/// Rows taken by the navbar, including its bottom border.
pub const NAVBAR_HEIGHT: u16 = 2;

fn toggle_label(settings: &Settings) -> String {
    format!("[{}]", settings.theme.toggle_icon())
}

fn right_spans(settings: &Settings) -> Vec<Span<'static>> {
    let palette = &settings.palette;
    vec![
        Span::styled(toggle_label(settings), palette.accent()),
        Span::raw(" "),
        Span::styled("[Login]", palette.muted()),
        Span::raw(" "),
        Span::styled("[Register]", palette.muted()),
        Span::raw(" "),
    ]
}

/// Render the navbar and return the clickable area of the theme toggle.
pub fn render_navbar(frame: &mut Frame, area: Rect, settings: &Settings) -> Rect {
    let palette = &settings.palette;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border())
        .style(palette.nav());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right = Line::from(right_spans(settings));
    let right_width = right.width() as u16;
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);

    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(BRAND, palette.heading()),
        Span::raw("   "),
        Span::styled("Home", palette.accent()),
    ]);
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(Paragraph::new(right), right_area);

    let toggle_width = toggle_label(settings).width() as u16;
    Rect {
        x: right_area.x,
        y: right_area.y,
        width: toggle_width.min(right_area.width),
        height: right_area.height.min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn first_row(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_navbar_shows_links_and_toggle() {
        let mut terminal = Terminal::new(TestBackend::new(80, NAVBAR_HEIGHT)).unwrap();
        let settings = Settings::new(Theme::Light);
        let mut toggle_area = Rect::default();

        terminal
            .draw(|frame| {
                toggle_area = render_navbar(frame, frame.area(), &settings);
            })
            .unwrap();

        let row = first_row(&terminal);
        assert!(row.contains(BRAND));
        assert!(row.contains("Home"));
        assert!(row.contains("[☾] [Login] [Register]"));
        assert_eq!(toggle_area.y, 0);
        assert_eq!(toggle_area.width, 3);
        assert_eq!(
            terminal.backend().buffer()[(toggle_area.x + 1, 0)].symbol(),
            "☾"
        );
    }

    #[test]
    fn test_navbar_icon_follows_theme() {
        let mut terminal = Terminal::new(TestBackend::new(80, NAVBAR_HEIGHT)).unwrap();
        let settings = Settings::new(Theme::Dark);
        terminal
            .draw(|frame| {
                render_navbar(frame, frame.area(), &settings);
            })
            .unwrap();
        assert!(first_row(&terminal).contains("[☀]"));
    }
}
