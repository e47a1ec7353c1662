//! HTTP client for the remote `/posts` collection.
//!
//! All four operations target a single base URL which can be overridden
//! (tests point it at a wiremock server). Responses are UTF-8 JSON.
//! No authentication, no retries, no request timeouts: a hung request
//! simply never resolves its mutation.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use super::types::{NewPost, Post, PostReplacement};

const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Errors that can come out of a posts API call.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure before a response was obtained (timeout, DNS,
    /// connection refused).
    Network(String),
    /// The service answered with a non-2xx status.
    Service { status: u16, message: String },
    /// A body failed to serialize or deserialize.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Service { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The four operations the application performs against the remote
/// collection. Seam for substituting a stub in tests.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetches the full collection, in the order the service returns it.
    async fn list(&self) -> Result<Vec<Post>, ApiError>;

    /// Creates a post; the service assigns and returns the `id`.
    async fn create(&self, new_post: &NewPost) -> Result<Post, ApiError>;

    /// Full-replaces the post with `replacement.id`.
    async fn replace(&self, replacement: &PostReplacement) -> Result<Post, ApiError>;

    /// Removes the post with the given id. No body is sent.
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

/// reqwest-backed implementation of [`PostsApi`].
pub struct HttpPostsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: u64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

/// Passes 2xx responses through; turns anything else into
/// [`ApiError::Service`] with the response text as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("Posts API error: {} - {}", status, message);
    Err(ApiError::Service { status, message })
}

#[async_trait]
impl PostsApi for HttpPostsClient {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        debug!("GET {}", self.posts_url());
        let response = self
            .client
            .get(self.posts_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        // The original UI renders nothing when the payload isn't a
        // sequence, so a non-array payload is an empty collection rather
        // than an error. Malformed *elements* are still a parse error.
        if !payload.is_array() {
            warn!("List payload is not a JSON array, rendering empty collection");
            return Ok(Vec::new());
        }

        let posts: Vec<Post> =
            serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn create(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        debug!("POST {} title={:?}", self.posts_url(), new_post.title);
        let body = serde_json::to_vec(new_post).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self
            .client
            .post(self.posts_url())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let created: Post = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Created post id={}", created.id);
        Ok(created)
    }

    async fn replace(&self, replacement: &PostReplacement) -> Result<Post, ApiError> {
        debug!("PUT {}", self.post_url(replacement.id));
        let body = serde_json::to_vec(replacement).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self
            .client
            .put(self.post_url(replacement.id))
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let replaced: Post = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Replaced post id={}", replaced.id);
        Ok(replaced)
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        debug!("DELETE {}", self.post_url(id));
        let response = self
            .client
            .delete(self.post_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        info!("Deleted post id={}", id);
        Ok(())
    }
}
