//! Keyboard and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, Screen};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('t') => self.toggle_theme(),
            // Placeholders in the navbar; nothing behind them yet
            KeyCode::Char('l') => tracing::debug!("Login is not available"),
            KeyCode::Char('r') => tracing::debug!("Register is not available"),
            _ => match self.screen {
                Screen::Feed => self.handle_feed_key(key.code),
                Screen::PostDetail => self.handle_detail_key(key.code),
            },
        }
    }

    fn handle_feed_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc | KeyCode::Backspace) {
            self.close_detail();
        }
    }

    /// Handle a mouse event. Only left clicks on the theme toggle do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self.hit_areas.theme_toggle.is_some_and(|area| {
            mouse.column >= area.x
                && mouse.column < area.x.saturating_add(area.width)
                && mouse.row >= area.y
                && mouse.row < area.y.saturating_add(area.height)
        });
        if hit {
            self.toggle_theme();
        }
    }
}
