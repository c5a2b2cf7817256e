//! Post card rendering.
//!
//! A card shows the author's initials badge and name, the date, the title
//! and the content. Everything is derived from the [`Post`] alone.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::layout::wrapped_line_count;
use super::theme::Palette;
use crate::models::Post;

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

/// Rows used by borders plus the author, date and spacer lines.
const CARD_CHROME_ROWS: u16 = 5;

/// Columns used by borders and horizontal padding.
const CARD_CHROME_COLS: u16 = 4;

/// Up to two upper-cased initials from a display name.
///
/// ```
/// use postdeck::ui::post_card::get_initials;
///
/// assert_eq!(get_initials("Ada Lovelace"), "AL");
/// assert_eq!(get_initials("madonna"), "M");
/// assert_eq!(get_initials(""), "");
/// ```
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Generated avatar image for an author.
pub fn avatar_url(author: &str) -> String {
    format!(
        "{}?name={}&background=random&size=40",
        AVATAR_ENDPOINT,
        urlencoding::encode(author)
    )
}

/// Height a card needs at the given outer width.
pub fn card_height(post: &Post, width: u16) -> u16 {
    let inner = width.saturating_sub(CARD_CHROME_COLS);
    CARD_CHROME_ROWS
        .saturating_add(wrapped_line_count(&post.title, inner))
        .saturating_add(wrapped_line_count(&post.content, inner))
}

// One `Line` per source line, matching how `card_height` counts rows.
fn card_lines<'a>(post: &'a Post, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", get_initials(&post.author)), palette.badge()),
            Span::raw(" "),
            Span::styled(post.author.as_str(), palette.accent()),
        ]),
        Line::from(Span::styled(post.date_posted.as_str(), palette.muted())),
        Line::default(),
    ];
    let heading = palette.heading();
    let muted = palette.muted();
    lines.extend(
        post.title
            .split('\n')
            .map(|text| Line::from(Span::styled(text, heading))),
    );
    lines.extend(
        post.content
            .split('\n')
            .map(|text| Line::from(Span::styled(text, muted))),
    );
    lines
}

fn card_block(selected: bool, palette: &Palette) -> Block<'static> {
    let border_style = if selected {
        palette.accent()
    } else {
        palette.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

/// Render one post as a card filling `area`.
pub fn render_post_card(
    frame: &mut Frame,
    area: Rect,
    post: &Post,
    selected: bool,
    palette: &Palette,
) {
    let paragraph = Paragraph::new(card_lines(post, palette))
        .block(card_block(selected, palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render a post with its avatar link, for the detail screen.
pub fn render_post_detail_card(frame: &mut Frame, area: Rect, post: &Post, palette: &Palette) {
    let mut lines = card_lines(post, palette);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Avatar: ", palette.muted()),
        Span::styled(avatar_url(&post.author), palette.accent()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(card_block(true, palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
