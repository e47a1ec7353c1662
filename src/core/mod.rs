//! # Core Application Logic
//!
//! Postdeck's business logic. It knows nothing about any specific UI
//! technology and performs no I/O.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! - [`state`]: the `App` struct with mutation statuses, the collection
//!   snapshot and the success notice.
//! - [`action`]: the `Action` enum and the `update()` reducer.
//! - [`form`]: typed request construction from raw form fields.
//! - [`config`]: settings with a defaults → file → env → CLI hierarchy.
//!
//! Network calls happen in the `tui` adapter, which turns completions
//! back into `Action`s. This keeps the reducer pure and testable with
//! fabricated timestamps instead of real timers.

pub mod action;
pub mod config;
pub mod form;
pub mod state;
