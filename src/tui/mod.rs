//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into core `Action` values. This is the
//! only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw:
//!
//! - **Animating** (collection loading, mutations in flight, success
//!   notice showing): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events.
//!
//! ## I/O model
//!
//! Network calls never run on the loop. `Effect::SpawnMutation` and
//! `Effect::RefreshCollection` spawn tokio tasks that perform the call
//! and send the completion back over an mpsc channel as an `Action`.
//! Nothing is cancelled or timed out: a hung request leaves its mutation
//! kind `Pending` indefinitely, and overlapping submissions of one kind
//! simply race (last response observed wins).

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{HttpPostsClient, NewPost, PostReplacement, PostsApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::ActionRequest;
use crate::core::state::{App, CollectionPhase, MutationOutcome};
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, PostFormBox, PostList};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub post_form: PostFormBox,
    pub post_list: PostList,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            post_form: PostFormBox::new(),
            post_list: PostList::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn PostsApi> = Arc::new(HttpPostsClient::new(config.base_url.clone()));
    let mut app = App::new(api, config.service_label());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // First mount: fetch the collection right away.
    spawn_fetch(app.api.clone(), tx.clone());

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();

        // Drop the success notice once it has expired so the idle loop
        // stops animating for it.
        if let Some(expires_at) = app.success_notice
            && now >= expires_at
        {
            app.success_notice = None;
            needs_redraw = true;
        }

        let animating = app.mutations.any_pending()
            || app.collection.phase == CollectionPhase::Loading
            || app.success_visible(now);

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit, Instant::now()) == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::Refresh => {
                    let effect = update(&mut app, Action::RefreshRequested, Instant::now());
                    if effect == Effect::RefreshCollection {
                        spawn_fetch(app.api.clone(), tx.clone());
                    }
                }

                // Scroll events always go to the list
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.post_list.handle_event(&event);
                }

                // Everything else belongs to the form
                _ => {
                    if let Some(form_event) = tui.post_form.handle_event(&event) {
                        match form_event {
                            FormEvent::Submit(form) => {
                                let effect =
                                    update(&mut app, Action::FormSubmitted(form), Instant::now());
                                if let Effect::SpawnMutation(request) = effect {
                                    // Only a validated submission clears the form.
                                    tui.post_form.reset();
                                    spawn_mutation(app.api.clone(), request, tx.clone());
                                }
                            }
                            FormEvent::ContentChanged => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (mutation and fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action, Instant::now()) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::RefreshCollection => {
                    spawn_fetch(app.api.clone(), tx.clone());
                }
                Effect::SpawnMutation(request) => {
                    spawn_mutation(app.api.clone(), request, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one validated mutation against the API and turns the result into
/// the `Action` the reducer expects. The error side carries the reason
/// only; `update()` composes the user-facing message.
pub async fn perform_mutation(api: Arc<dyn PostsApi>, request: ActionRequest) -> Action {
    let kind = request.kind();
    let result = match request {
        ActionRequest::Add {
            title,
            body,
            user_id,
        } => api
            .create(&NewPost {
                title,
                body,
                user_id,
            })
            .await
            .map(MutationOutcome::Created),
        ActionRequest::Update { id, title, body } => api
            .replace(&PostReplacement { id, title, body })
            .await
            .map(MutationOutcome::Replaced),
        ActionRequest::Delete { id } => api.delete(id).await.map(|_| MutationOutcome::Removed(id)),
    };

    Action::MutationFinished {
        kind,
        result: result.map_err(|e| e.to_string()),
    }
}

/// Fetches the full collection and wraps it as an `Action`.
pub async fn perform_fetch(api: Arc<dyn PostsApi>) -> Action {
    Action::CollectionLoaded(api.list().await.map_err(|e| e.to_string()))
}

fn spawn_mutation(api: Arc<dyn PostsApi>, request: ActionRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning {} request", request.kind().verb());
    tokio::spawn(async move {
        if tx.send(perform_mutation(api, request).await).is_err() {
            warn!("Failed to send mutation result: receiver dropped");
        }
    });
}

fn spawn_fetch(api: Arc<dyn PostsApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning collection fetch");
    tokio::spawn(async move {
        if tx.send(perform_fetch(api).await).is_err() {
            warn!("Failed to send fetched collection: receiver dropped");
        }
    });
}
