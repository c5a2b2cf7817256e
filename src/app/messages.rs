//! AppMessage enum for async communication within the application.

use crate::models::Post;

/// Results delivered from background fetch tasks to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The post list fetch finished
    PostsResolved(Result<Vec<Post>, String>),
    /// A single post fetch finished
    PostResolved {
        id: i64,
        result: Result<Post, String>,
    },
}
