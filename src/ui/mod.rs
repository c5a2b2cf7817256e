//! UI rendering for the blog reader.
//!
//! The page is a navbar, a main region and a one-line footer with key hints.
//! The main region depends on the screen:
//!
//! - Feed: `Loading posts...`, `Error: <message>`, or the post cards with
//!   the sidebar beside them (or beneath them on narrow terminals)
//! - Post detail: the selected post fetched on its own, with its avatar link
//!
//! Column sizing goes through [`LayoutContext`] so narrow terminals stack
//! the sidebar below the posts.

pub mod layout;
pub mod navbar;
pub mod post_card;
pub mod sidebar;
pub mod theme;

pub use layout::{breakpoints, wrapped_line_count, LayoutContext};
pub use navbar::render_navbar;
pub use post_card::{avatar_url, card_height, get_initials, render_post_card};
pub use sidebar::render_sidebar;
pub use theme::Palette;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::models::Post;
use crate::state::FetchState;
use navbar::NAVBAR_HEIGHT;
use post_card::render_post_detail_card;
use sidebar::sidebar_height;

/// Rows between stacked cards.
const CARD_GAP: u16 = 1;

/// Smallest slice of a card worth drawing at the bottom of the list.
const MIN_PARTIAL_CARD: u16 = 3;

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.settings.palette;
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [nav_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let toggle = render_navbar(frame, nav_area, &app.settings);
    app.hit_areas.theme_toggle = Some(toggle);

    let content = inset(main_area);
    match app.screen {
        Screen::Feed => render_feed(frame, content, app, &palette),
        Screen::PostDetail => render_detail(frame, content, app, &palette),
    }

    render_footer(frame, footer_area, app.screen, &palette);
}

/// Main region minus a one-column gutter and a blank top row.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    }
}

fn render_status(frame: &mut Frame, area: Rect, text: String, style: Style) {
    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_feed(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    match app.feed.state() {
        FetchState::Loading => {
            render_status(frame, area, "Loading posts...".to_string(), palette.muted())
        }
        FetchState::Failed(message) => {
            render_status(frame, area, format!("Error: {}", message), palette.error())
        }
        FetchState::Loaded(posts) => {
            let ctx = LayoutContext::new(area.width, area.height);
            let (posts_area, sidebar_area) = if ctx.should_stack_panels() {
                let sidebar_rows = sidebar_height().min(area.height);
                let [posts_area, sidebar_area] = Layout::vertical([
                    Constraint::Min(0),
                    Constraint::Length(sidebar_rows),
                ])
                .areas(area);
                (posts_area, sidebar_area)
            } else {
                let (posts_width, _) = ctx.two_column_widths();
                let [posts_area, _, sidebar_area] = Layout::horizontal([
                    Constraint::Length(posts_width.saturating_sub(1)),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);
                let sidebar_area = Rect {
                    height: sidebar_height().min(sidebar_area.height),
                    ..sidebar_area
                };
                (posts_area, sidebar_area)
            };

            render_post_list(frame, posts_area, posts, app.selected, palette);
            render_sidebar(frame, sidebar_area, palette);
        }
    }
}

/// First card to draw so the selected one is fully visible.
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    let mut start = selected.min(heights.len().saturating_sub(1));
    let mut used = heights.get(start).copied().unwrap_or(0);
    while start > 0 {
        let needed = used
            .saturating_add(CARD_GAP)
            .saturating_add(heights[start - 1]);
        if needed > available {
            break;
        }
        used = needed;
        start -= 1;
    }
    start
}

fn render_post_list(
    frame: &mut Frame,
    area: Rect,
    posts: &[Post],
    selected: usize,
    palette: &Palette,
) {
    let heights: Vec<u16> = posts
        .iter()
        .map(|post| card_height(post, area.width))
        .collect();
    let start = first_visible(&heights, selected, area.height);

    let bottom = area.y.saturating_add(area.height);
    let mut y = area.y;
    for (index, post) in posts.iter().enumerate().skip(start) {
        let remaining = bottom.saturating_sub(y);
        if remaining < MIN_PARTIAL_CARD {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: heights[index].min(remaining),
        };
        render_post_card(frame, card_area, post, index == selected, palette);
        y = y.saturating_add(heights[index]).saturating_add(CARD_GAP);
    }
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(detail) = app.detail.as_ref() else {
        return;
    };
    match detail.post.state() {
        FetchState::Loading => {
            render_status(frame, area, "Loading post...".to_string(), palette.muted())
        }
        FetchState::Failed(message) => {
            render_status(frame, area, format!("Error: {}", message), palette.error())
        }
        FetchState::Loaded(post) => render_post_detail_card(frame, area, post, palette),
    }
}

fn footer_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Feed => " j/k select  enter open  t theme  q quit",
        Screen::PostDetail => " esc back  t theme  q quit",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, screen: Screen, palette: &Palette) {
    let line = Line::from(Span::styled(footer_hints(screen), palette.muted()));
    frame.render_widget(Paragraph::new(line), area);
}
