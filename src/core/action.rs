//! # Actions
//!
//! Everything that can happen in Postdeck becomes an `Action`.
//! User submits the form? That's `Action::FormSubmitted(form)`.
//! A network call finishes? That's `Action::MutationFinished { .. }`.
//!
//! The `update()` function takes the current state, an action and the
//! current instant, mutates the state, and returns an `Effect` telling
//! the adapter what I/O to start. No I/O happens here.
//!
//! ```text
//! State + Action + now  →  update()  →  New State + Effect
//! ```
//!
//! The instant is a parameter so the success-notice lifecycle can be
//! tested with fabricated timestamps instead of real timers.

use std::time::Instant;

use crate::api::Post;
use crate::core::form::{ActionRequest, PostForm};
use crate::core::state::{
    App, CollectionPhase, MutationKind, MutationOutcome, MutationStatus, SUCCESS_NOTICE_TTL,
};

#[derive(Debug, Clone)]
pub enum Action {
    /// The user submitted the form. Validation happens inside `update()`.
    FormSubmitted(PostForm),
    /// A dispatched mutation came back. `Err` carries the reason only;
    /// the user-facing message is composed here.
    MutationFinished {
        kind: MutationKind,
        result: Result<MutationOutcome, String>,
    },
    /// A collection fetch came back.
    CollectionLoaded(Result<Vec<Post>, String>),
    /// The user asked for a manual re-fetch.
    RefreshRequested,
    Quit,
}

/// I/O the adapter must perform after an `update()` call.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Issue the network call for this validated request.
    SpawnMutation(ActionRequest),
    /// The collection changed (or a refresh was requested): re-fetch it.
    RefreshCollection,
}

pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::FormSubmitted(form) => match form.to_request() {
            Ok(request) => {
                let kind = request.kind();
                // A resubmit while pending is allowed; the statuses just
                // race and the last response observed wins.
                *app.mutations.status_mut(kind) = MutationStatus::Pending;
                app.validation_error = None;
                app.status_message = format!("Sending {} request", kind.verb());
                Effect::SpawnMutation(request)
            }
            Err(invalid) => {
                app.validation_error = Some(invalid.to_string());
                Effect::None
            }
        },

        Action::MutationFinished { kind, result } => match result {
            Ok(outcome) => {
                *app.mutations.status_mut(kind) = MutationStatus::Succeeded(outcome);
                // Shared notice: a later success re-arms the same expiry.
                app.success_notice = Some(now + SUCCESS_NOTICE_TTL);
                app.status_message = format!("{} succeeded", kind.label());
                // Invalidation happens-after the success response: the
                // snapshot is stale, tell the adapter to re-fetch.
                app.collection.phase = CollectionPhase::Loading;
                Effect::RefreshCollection
            }
            Err(reason) => {
                *app.mutations.status_mut(kind) =
                    MutationStatus::Failed(format!("Failed to {} post: {}", kind.verb(), reason));
                app.status_message = format!("{} failed", kind.label());
                Effect::None
            }
        },

        Action::CollectionLoaded(result) => {
            match result {
                Ok(items) => {
                    app.status_message = format!("{} posts", items.len());
                    app.collection.items = items;
                    app.collection.phase = CollectionPhase::Ready;
                }
                Err(reason) => {
                    // Prior cached items are kept on screen.
                    app.collection.phase =
                        CollectionPhase::Error(format!("Failed to fetch posts: {reason}"));
                    app.status_message = String::from("Fetch failed");
                }
            }
            Effect::None
        }

        Action::RefreshRequested => {
            app.collection.phase = CollectionPhase::Loading;
            app.status_message = String::from("Refreshing");
            Effect::RefreshCollection
        }

        Action::Quit => Effect::Quit,
    }
}
