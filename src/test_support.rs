//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, NewPost, Post, PostReplacement, PostsApi};
use crate::core::state::App;

/// A canned-response API for tests that don't need a real server.
/// Creation always assigns id 101, the way the placeholder service does.
#[derive(Default)]
pub struct StubApi {
    pub posts: Vec<Post>,
}

#[async_trait]
impl PostsApi for StubApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.posts.clone())
    }

    async fn create(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        Ok(Post {
            id: 101,
            title: new_post.title.clone(),
            body: new_post.body.clone(),
            user_id: new_post.user_id,
        })
    }

    async fn replace(&self, replacement: &PostReplacement) -> Result<Post, ApiError> {
        Ok(Post {
            id: replacement.id,
            title: replacement.title.clone(),
            body: replacement.body.clone(),
            user_id: 0,
        })
    }

    async fn delete(&self, _id: u64) -> Result<(), ApiError> {
        Ok(())
    }
}

/// An API where every call answers HTTP 500.
pub struct FailingApi;

#[async_trait]
impl PostsApi for FailingApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        Err(service_error())
    }

    async fn create(&self, _new_post: &NewPost) -> Result<Post, ApiError> {
        Err(service_error())
    }

    async fn replace(&self, _replacement: &PostReplacement) -> Result<Post, ApiError> {
        Err(service_error())
    }

    async fn delete(&self, _id: u64) -> Result<(), ApiError> {
        Err(service_error())
    }
}

fn service_error() -> ApiError {
    ApiError::Service {
        status: 500,
        message: "boom".to_string(),
    }
}

/// Creates a test App backed by a StubApi.
pub fn test_app() -> App {
    App::new(Arc::new(StubApi::default()), "stub.local".to_string())
}

/// Shorthand for building a Post in tests.
pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        user_id: 1,
    }
}
