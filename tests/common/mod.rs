//! Common test utilities for integration tests.
//!
//! Fixtures for posts, a wiremock-backed blog server, and helpers for
//! reading a rendered ratatui buffer back as text.

#![allow(dead_code)]

use std::sync::Arc;

use postdeck::adapters::{InMemoryStore, ReqwestHttpClient};
use postdeck::api::ApiClient;
use postdeck::app::App;
use postdeck::traits::KeyValueStore;
use postdeck::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The post every single-post scenario uses.
pub fn jane_doe_json() -> Value {
    json!({
        "id": 1,
        "title": "Hi",
        "content": "Body",
        "author": "Jane Doe",
        "date_posted": "2024-01-01"
    })
}

/// A post as the real backend sends it, with the author as a user object.
pub fn nested_author_json(id: i64, title: &str, username: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "Body text",
        "author": { "id": 7, "username": username, "email": "x@example.com" },
        "date_posted": "2024-03-05T10:00:00"
    })
}

/// Start a mock server answering `GET /api/posts` with `body`.
pub async fn blog_server(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// API client pointed at the mock server's `/api`.
pub fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(
        format!("{}/api", server.uri()),
        Arc::new(ReqwestHttpClient::new()),
    )
}

/// App wired to the mock server with an in-memory preference store.
pub fn app_for(server: &MockServer) -> App {
    app_with_store(server, Box::new(InMemoryStore::new()))
}

pub fn app_with_store(server: &MockServer, store: Box<dyn KeyValueStore>) -> App {
    App::new(api_for(server), store)
}

/// Activate the app and apply the first background message.
pub async fn activate_and_settle(app: &mut App) {
    app.activate();
    settle(app).await;
}

/// Apply the next background message.
pub async fn settle(app: &mut App) {
    let message = app
        .message_rx
        .as_mut()
        .expect("receiver still owned by the app")
        .recv()
        .await
        .expect("channel open");
    app.handle_message(message);
}

/// Render the app into a test terminal and return its rows.
pub fn render_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

pub fn render_text(app: &mut App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}
