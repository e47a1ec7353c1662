use serde::{Deserialize, Serialize};

/// A single post as returned by the remote service.
///
/// The `id` is assigned by the service on creation and immutable after
/// that. `userId` is defaulted because replace responses echo only the
/// fields that were sent (`{id, title, body}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub user_id: u32,
}

/// Body of a creation request. The service picks the `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

/// Body of a full-replace request, keyed by `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostReplacement {
    pub id: u64,
    pub title: String,
    pub body: String,
}
