//! # API Layer
//!
//! Everything that talks HTTP to the remote posts service lives here.
//! The rest of the application only sees the [`PostsApi`] trait and the
//! wire types; no reqwest leaks past this module.

pub mod client;
pub mod types;

pub use client::{ApiError, HttpPostsClient, PostsApi};
pub use types::{NewPost, Post, PostReplacement};
