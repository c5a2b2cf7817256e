//! Blog post records as served by the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// A single blog entry.
///
/// Posts are read-only on the client: they are decoded from API responses
/// and dropped on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Backend-assigned identifier
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Display name of the author
    #[serde(deserialize_with = "deserialize_author")]
    pub author: String,
    /// Shown verbatim, never parsed
    pub date_posted: String,
}

impl Post {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        date_posted: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            date_posted: date_posted.into(),
        }
    }
}

/// The backend's post schema nests the author as a user object, while
/// older deployments send a bare display name. Both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorField {
    Name(String),
    User { username: String },
}

fn deserialize_author<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AuthorField::deserialize(deserializer)? {
        AuthorField::Name(name) => name,
        AuthorField::User { username } => username,
    })
}
