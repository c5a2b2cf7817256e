//! Blog API client.
//!
//! Two read-only endpoints: the post list and a single post. Any non-2xx
//! status is reported as the same "fetch failed" error regardless of class.
//! There is no retry, timeout or caching.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::Post;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("{message}")]
    FetchFailed { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// The body did not match the post schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the blog backend's post endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over an arbitrary HTTP implementation.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Create a reqwest-backed client for the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Base URL requests are built from, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every post, in the order the backend returns them.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts", self.base_url);
        let response = self.fetch(&url, "Failed to fetch posts").await?;
        let posts: Vec<Post> = response.json()?;
        tracing::debug!(count = posts.len(), "Loaded posts");
        Ok(posts)
    }

    /// Fetch a single post by id.
    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        let url = format!("{}/posts/{}", self.base_url, id);
        let response = self.fetch(&url, "Failed to fetch post").await?;
        Ok(response.json()?)
    }

    async fn fetch(&self, url: &str, failure: &str) -> Result<Response, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url, &Headers::new()).await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Request failed");
            ApiError::Transport(e)
        })?;

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "{}", failure);
            return Err(ApiError::FetchFailed {
                status: response.status,
                message: failure.to_string(),
            });
        }
        Ok(response)
    }
}
