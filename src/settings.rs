//! Display settings and the persisted light/dark preference.
//!
//! The preference lives under [`THEME_KEY`] in a [`KeyValueStore`]. It is
//! read once when the toggle is created and written only from
//! [`ThemeToggle::toggle`], which runs on the UI loop in response to a key
//! press or click.

use crate::traits::{KeyValueStore, StorageError};
use crate::ui::theme::Palette;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button: the mode it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

/// Boundary that makes a display mode visible.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

/// Settings passed down to every render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub theme: Theme,
    pub palette: Palette,
}

impl Settings {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
        }
    }
}

impl ThemeSurface for Settings {
    fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }
}

/// Two-state theme switch backed by durable storage.
pub struct ThemeToggle {
    theme: Theme,
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ThemeToggle {
    /// Read the stored preference; absent or unrecognised means light.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        tracing::debug!(theme = theme.as_str(), "Loaded theme preference");
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply the loaded preference to `surface` without writing anything.
    pub fn mount(&self, surface: &mut dyn ThemeSurface) {
        surface.apply(self.theme);
    }

    /// Flip the mode, apply it, then persist it.
    ///
    /// If the write fails the new mode stays active for this session and the
    /// error is returned.
    pub fn toggle(&mut self, surface: &mut dyn ThemeSurface) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        surface.apply(self.theme);
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}
