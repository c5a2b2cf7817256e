//! Color palettes for the light and dark display modes.

use ratatui::style::{Color, Modifier, Style};

use crate::settings::Theme;

/// Colors used by every render function.
///
/// A palette is derived from the active [`Theme`] and passed down through
/// [`Settings`](crate::settings::Settings); nothing reads global color state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Body text
    pub foreground: Color,
    /// Secondary text (dates, post content, hints)
    pub muted: Color,
    /// Card and panel borders
    pub border: Color,
    /// Links, author names and the selected card
    pub accent: Color,
    /// Error text
    pub error: Color,
    /// Navbar background
    pub nav_background: Color,
    /// Initials badge
    pub badge_background: Color,
    pub badge_foreground: Color,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(15, 23, 42),
            muted: Color::Rgb(100, 116, 139),
            border: Color::Rgb(203, 213, 225),
            accent: Color::Rgb(2, 132, 199),
            error: Color::Rgb(220, 38, 38),
            nav_background: Color::Rgb(241, 245, 249),
            badge_background: Color::Rgb(226, 232, 240),
            badge_foreground: Color::Rgb(15, 23, 42),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(10, 15, 35),
            foreground: Color::Rgb(241, 245, 249),
            muted: Color::Rgb(148, 163, 184),
            border: Color::DarkGray,
            // sky-400
            accent: Color::Rgb(56, 189, 248),
            error: Color::Rgb(239, 68, 68),
            nav_background: Color::Rgb(20, 20, 30),
            badge_background: Color::Rgb(51, 65, 85),
            badge_foreground: Color::White,
        }
    }

    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Base style for the whole frame.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge_foreground)
            .bg(self.badge_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .bg(self.nav_background)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
