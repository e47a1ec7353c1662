//! Typed request construction from raw form input.
//!
//! The TUI form captures every field as a string. This module is the one
//! place where those strings are parsed and validated into a well-formed
//! [`ActionRequest`] - or rejected with a [`ValidationError`] that the
//! banner can display. Nothing downstream ever re-parses form text.

use std::fmt;

use crate::core::state::MutationKind;

/// Raw form fields as captured by the TUI, all strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub kind: MutationKind,
    pub post_id: String,
    pub title: String,
    pub body: String,
    pub user_id: String,
}

/// A validated, transient description of one mutation. Constructed fresh
/// per submission and consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    Add {
        title: String,
        body: String,
        user_id: u32,
    },
    Update {
        id: u64,
        title: String,
        body: String,
    },
    Delete {
        id: u64,
    },
}

impl ActionRequest {
    pub fn kind(&self) -> MutationKind {
        match self {
            ActionRequest::Add { .. } => MutationKind::Add,
            ActionRequest::Update { .. } => MutationKind::Update,
            ActionRequest::Delete { .. } => MutationKind::Delete,
        }
    }
}

/// Client-side validation failure. Blocks dispatch; nothing is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingTitle,
    MissingBody,
    /// Un-parseable or non-positive user id.
    InvalidUserId(String),
    /// Missing or un-parseable post id.
    InvalidPostId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingTitle => write!(f, "title is required"),
            ValidationError::MissingBody => write!(f, "body is required"),
            ValidationError::InvalidUserId(got) => {
                write!(f, "user id must be a positive integer (got {got:?})")
            }
            ValidationError::InvalidPostId(got) => {
                write!(f, "post id must be an integer (got {got:?})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl PostForm {
    /// Parses and validates the raw fields into an [`ActionRequest`].
    ///
    /// Add needs title, body and a positive integer user id. Update needs
    /// a post id plus title and body. Delete needs the post id only.
    pub fn to_request(&self) -> Result<ActionRequest, ValidationError> {
        match self.kind {
            MutationKind::Add => Ok(ActionRequest::Add {
                title: required(&self.title, ValidationError::MissingTitle)?,
                body: required(&self.body, ValidationError::MissingBody)?,
                user_id: parse_user_id(&self.user_id)?,
            }),
            MutationKind::Update => Ok(ActionRequest::Update {
                id: parse_post_id(&self.post_id)?,
                title: required(&self.title, ValidationError::MissingTitle)?,
                body: required(&self.body, ValidationError::MissingBody)?,
            }),
            MutationKind::Delete => Ok(ActionRequest::Delete {
                id: parse_post_id(&self.post_id)?,
            }),
        }
    }
}

fn required(raw: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_user_id(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::InvalidUserId(raw.trim().to_string()))
}

fn parse_post_id(raw: &str) -> Result<u64, ValidationError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidPostId(raw.trim().to_string()))
}
