//! # Application State
//!
//! Core business state for Postdeck. This module contains domain state
//! only - presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn PostsApi>        // remote posts service
//! ├── service_label: String          // host shown in the title bar
//! ├── mutations: MutationBoard       // per-kind Idle/Pending/Succeeded/Failed
//! ├── collection: Collection         // cached posts + Loading/Error/Ready phase
//! ├── success_notice: Option<Instant> // shared banner expiry timestamp
//! ├── validation_error: Option<String> // last rejected form submission
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action, now)` in
//! action.rs, so no surprise mutations.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{Post, PostsApi};

/// How long the shared success notice stays visible after a mutation
/// succeeds. A later success re-arms the same notice.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(5);

/// The three mutation kinds tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationKind {
    #[default]
    Add,
    Update,
    Delete,
}

impl MutationKind {
    /// Lowercase verb used in failure messages ("Failed to add post").
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::Add => "add",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::Add => "Add",
            MutationKind::Update => "Update",
            MutationKind::Delete => "Delete",
        }
    }
}

/// What a successful mutation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Created(Post),
    Replaced(Post),
    Removed(u64),
}

/// Lifecycle of one mutation kind. Reset to `Pending` on submit; a second
/// submission of the same kind while one is pending simply overwrites -
/// last response observed wins, nothing is cancelled.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(MutationOutcome),
    Failed(String),
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationStatus::Pending)
    }
}

/// One status slot per mutation kind. The kinds are independent: a
/// failure in one never touches the other two.
#[derive(Debug, Default)]
pub struct MutationBoard {
    pub add: MutationStatus,
    pub update: MutationStatus,
    pub delete: MutationStatus,
}

impl MutationBoard {
    pub fn status(&self, kind: MutationKind) -> &MutationStatus {
        match kind {
            MutationKind::Add => &self.add,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
        }
    }

    pub fn status_mut(&mut self, kind: MutationKind) -> &mut MutationStatus {
        match kind {
            MutationKind::Add => &mut self.add,
            MutationKind::Update => &mut self.update,
            MutationKind::Delete => &mut self.delete,
        }
    }

    pub fn any_pending(&self) -> bool {
        self.add.is_pending() || self.update.is_pending() || self.delete.is_pending()
    }

    /// The first failure message across the board, for the banner.
    pub fn first_failure(&self) -> Option<&str> {
        [&self.add, &self.update, &self.delete]
            .into_iter()
            .find_map(|status| match status {
                MutationStatus::Failed(msg) => Some(msg.as_str()),
                _ => None,
            })
    }
}

/// Where the collection snapshot currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionPhase {
    Loading,
    Error(String),
    Ready,
}

/// The cached collection snapshot. `items` survives a fetch failure; only
/// the phase changes, so the last good list stays on screen.
#[derive(Debug)]
pub struct Collection {
    pub phase: CollectionPhase,
    pub items: Vec<Post>,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            phase: CollectionPhase::Loading,
            items: Vec::new(),
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub api: Arc<dyn PostsApi>,
    pub service_label: String,
    pub mutations: MutationBoard,
    pub collection: Collection,
    /// Expiry timestamp of the shared success notice. Visibility is
    /// recomputed against `now` at render time, never via a timer.
    pub success_notice: Option<Instant>,
    /// Message from the last form submission that failed validation.
    pub validation_error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(api: Arc<dyn PostsApi>, service_label: String) -> Self {
        Self {
            api,
            service_label,
            mutations: MutationBoard::default(),
            collection: Collection::new(),
            success_notice: None,
            validation_error: None,
            status_message: String::from("Welcome to Postdeck!"),
        }
    }

    /// Whether the success notice should be shown at `now`.
    pub fn success_visible(&self, now: Instant) -> bool {
        self.success_notice.is_some_and(|expires_at| now < expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Postdeck!");
        assert_eq!(app.mutations.add, MutationStatus::Idle);
        assert_eq!(app.collection.phase, CollectionPhase::Loading);
        assert!(app.collection.items.is_empty());
        assert!(app.success_notice.is_none());
    }

    #[test]
    fn test_success_notice_visibility_is_a_pure_time_check() {
        let mut app = test_app();
        let now = Instant::now();
        assert!(!app.success_visible(now));

        app.success_notice = Some(now + SUCCESS_NOTICE_TTL);
        assert!(app.success_visible(now));
        assert!(app.success_visible(now + SUCCESS_NOTICE_TTL - Duration::from_millis(1)));
        assert!(!app.success_visible(now + SUCCESS_NOTICE_TTL));
    }

    #[test]
    fn test_board_first_failure_order() {
        let mut board = MutationBoard::default();
        assert!(board.first_failure().is_none());
        board.delete = MutationStatus::Failed("Failed to delete post: gone".to_string());
        assert_eq!(
            board.first_failure(),
            Some("Failed to delete post: gone")
        );
        board.add = MutationStatus::Failed("Failed to add post: nope".to_string());
        assert_eq!(board.first_failure(), Some("Failed to add post: nope"));
    }
}
