//! Application state and logic for the TUI.
//!
//! [`App`] owns everything the page shows: the post feed, the optional
//! post detail, the selection and the display settings. Background fetches
//! report back through [`AppMessage`]s on an unbounded channel that the
//! main loop drains alongside terminal events.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::Post;
use crate::settings::{Settings, ThemeToggle};
use crate::state::Resource;
use crate::traits::KeyValueStore;

/// Which screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Post cards and sidebar
    #[default]
    Feed,
    /// A single post, fetched by id
    PostDetail,
}

/// A single post being viewed.
#[derive(Debug)]
pub struct PostDetail {
    pub id: i64,
    pub post: Resource<Post>,
}

/// Clickable regions recorded during the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub theme_toggle: Option<Rect>,
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    /// The post list, fetched once per activation
    pub feed: Resource<Vec<Post>>,
    pub detail: Option<PostDetail>,
    /// Index of the highlighted card
    pub selected: usize,
    pub settings: Settings,
    theme_toggle: ThemeToggle,
    api: Arc<ApiClient>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background results; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub hit_areas: HitAreas,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("feed", &self.feed.state())
            .field("selected", &self.selected)
            .field("theme", &self.settings.theme)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the application, reading the theme preference from `store`.
    pub fn new(api: ApiClient, store: Box<dyn KeyValueStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme_toggle = ThemeToggle::load(store);
        let mut settings = Settings::default();
        theme_toggle.mount(&mut settings);

        Self {
            screen: Screen::Feed,
            feed: Resource::new(),
            detail: None,
            selected: 0,
            settings,
            theme_toggle,
            api: Arc::new(api),
            message_tx,
            message_rx: Some(message_rx),
            hit_areas: HitAreas::default(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Start the post list fetch. Must run inside a tokio runtime.
    ///
    /// Only the first call has any effect.
    pub fn activate(&mut self) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let spawned = self.feed.start(async move {
            let result = api.list_posts().await.map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::PostsResolved(result));
        });
        if spawned {
            tracing::info!(base = self.api.base_url(), "Fetching posts");
        }
    }

    /// Apply a background result.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PostsResolved(result) => {
                if let Err(ref e) = result {
                    tracing::warn!("Post list failed: {}", e);
                }
                if self.feed.resolve(result) {
                    self.clamp_selection();
                    self.mark_dirty();
                }
            }
            AppMessage::PostResolved { id, result } => {
                let applied = match self.detail.as_mut() {
                    Some(detail) if detail.id == id => detail.post.resolve(result),
                    _ => {
                        tracing::debug!(id, "Dropping result for a post no longer shown");
                        false
                    }
                };
                if applied {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Posts currently shown; empty unless the feed loaded.
    pub fn posts(&self) -> &[Post] {
        self.feed.items()
    }

    /// The highlighted post, if any.
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts().len() {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Open the detail screen for the highlighted post and fetch it.
    pub fn open_selected(&mut self) {
        let Some(id) = self.selected_post().map(|post| post.id) else {
            return;
        };

        // Replacing the detail drops the previous resource, aborting its task
        let mut post = Resource::new();
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        post.start(async move {
            let result = api.get_post(id).await.map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::PostResolved { id, result });
        });
        self.detail = Some(PostDetail { id, post });
        self.screen = Screen::PostDetail;
        self.mark_dirty();
    }

    /// Leave the detail screen, cancelling its fetch if still running.
    pub fn close_detail(&mut self) {
        if let Some(mut detail) = self.detail.take() {
            detail.post.cancel();
        }
        self.screen = Screen::Feed;
        self.mark_dirty();
    }

    /// Flip light/dark mode and persist the choice.
    pub fn toggle_theme(&mut self) {
        match self.theme_toggle.toggle(&mut self.settings) {
            Ok(theme) => tracing::info!(theme = theme.as_str(), "Theme changed"),
            Err(e) => tracing::warn!("Theme changed but could not be saved: {}", e),
        }
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.posts().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStore, MockHttpClient, MockResponse};
    use crate::settings::{Theme, THEME_KEY};
    use crate::traits::HttpError;

    fn post_json(id: i64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "content": "Body",
            "author": "Jane Doe",
            "date_posted": "2024-01-01"
        })
    }

    fn app_with(mock: &MockHttpClient, store: InMemoryStore) -> App {
        let api = ApiClient::new("http://test/api", Arc::new(mock.clone()));
        App::new(api, Box::new(store))
    }

    async fn next_message(app: &mut App) -> AppMessage {
        app.message_rx.as_mut().unwrap().recv().await.unwrap()
    }

    #[tokio::test]
    async fn test_activate_loads_posts_once() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test/api/posts",
            MockResponse::json(serde_json::json!([post_json(1, "A"), post_json(2, "B")])),
        );
        let mut app = app_with(&mock, InMemoryStore::new());
        assert!(app.feed.is_loading());

        app.activate();
        app.activate();
        let message = next_message(&mut app).await;
        app.handle_message(message);

        assert!(!app.feed.is_loading());
        assert_eq!(app.feed.error(), None);
        let titles: Vec<&str> = app.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_error_and_no_posts() {
        let mock = MockHttpClient::new();
        mock.set_response("http://test/api/posts", MockResponse::status(500));
        let mut app = app_with(&mock, InMemoryStore::new());

        app.activate();
        let message = next_message(&mut app).await;
        app.handle_message(message);

        assert!(!app.feed.is_loading());
        assert_eq!(app.feed.error(), Some("Failed to fetch posts"));
        assert!(app.posts().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_message_is_kept() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let mut app = app_with(&mock, InMemoryStore::new());

        app.activate();
        let message = next_message(&mut app).await;
        app.handle_message(message);

        assert_eq!(app.feed.error(), Some("Connection failed: refused"));
    }

    #[tokio::test]
    async fn test_open_and_close_detail() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test/api/posts",
            MockResponse::json(serde_json::json!([post_json(1, "A"), post_json(2, "B")])),
        );
        mock.set_response(
            "http://test/api/posts/2",
            MockResponse::json(post_json(2, "B (full)")),
        );
        let mut app = app_with(&mock, InMemoryStore::new());
        app.activate();
        let message = next_message(&mut app).await;
        app.handle_message(message);

        app.select_next();
        app.open_selected();
        assert_eq!(app.screen, Screen::PostDetail);

        let message = next_message(&mut app).await;
        app.handle_message(message);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.id, 2);
        assert_eq!(detail.post.data().unwrap().title, "B (full)");

        app.close_detail();
        assert_eq!(app.screen, Screen::Feed);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_stale_detail_result_is_dropped() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, InMemoryStore::new());
        app.detail = Some(PostDetail {
            id: 5,
            post: Resource::new(),
        });

        app.handle_message(AppMessage::PostResolved {
            id: 4,
            result: Err("late".to_string()),
        });

        assert!(app.detail.as_ref().unwrap().post.is_loading());
    }

    #[test]
    fn test_selection_is_bounded() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, InMemoryStore::new());
        app.handle_message(AppMessage::PostsResolved(Ok(vec![
            Post::new(1, "A", "a", "X", "d"),
            Post::new(2, "B", "b", "Y", "d"),
        ])));

        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_post().unwrap().id, 2);
    }

    #[test]
    fn test_open_selected_without_posts_is_noop() {
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, InMemoryStore::new());
        app.open_selected();
        assert_eq!(app.screen, Screen::Feed);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_theme_loaded_from_store_and_toggled() {
        let store = InMemoryStore::with_entry(THEME_KEY, "dark");
        let mock = MockHttpClient::new();
        let mut app = app_with(&mock, store.clone());
        assert_eq!(app.settings.theme, Theme::Dark);

        app.toggle_theme();
        assert_eq!(app.settings.theme, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }
}
