//! # Banner Component
//!
//! The inline alert line under the title bar: validation failures,
//! per-kind mutation failures, or the shared success notice. Which one
//! to show is decided in [`Banner::for_app`] against the current
//! instant, so visibility is recomputed per render instead of being
//! flipped by a timer.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::component::Component;

pub const SUCCESS_TEXT: &str = "Action completed successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    /// Picks the banner to show, if any. Errors outrank the success
    /// notice; a rejected submission outranks mutation failures because
    /// it is the most recent thing the user did.
    pub fn for_app(app: &App, now: Instant) -> Option<Banner> {
        if let Some(invalid) = &app.validation_error {
            return Some(Banner {
                kind: BannerKind::Error,
                text: format!("Invalid submission: {invalid}"),
            });
        }
        if let Some(failure) = app.mutations.first_failure() {
            return Some(Banner {
                kind: BannerKind::Error,
                text: failure.to_string(),
            });
        }
        if app.success_visible(now) {
            return Some(Banner {
                kind: BannerKind::Success,
                text: SUCCESS_TEXT.to_string(),
            });
        }
        None
    }
}

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.kind {
            BannerKind::Success => Style::default().fg(Color::Green),
            BannerKind::Error => Style::default().fg(Color::Red),
        };
        frame.render_widget(Span::styled(self.text.as_str(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{MutationStatus, SUCCESS_NOTICE_TTL};
    use crate::test_support::test_app;
    use std::time::Duration;

    #[test]
    fn test_no_banner_by_default() {
        let app = test_app();
        assert_eq!(Banner::for_app(&app, Instant::now()), None);
    }

    #[test]
    fn test_success_notice_shows_then_expires() {
        let mut app = test_app();
        let now = Instant::now();
        app.success_notice = Some(now + SUCCESS_NOTICE_TTL);

        let banner = Banner::for_app(&app, now).unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, SUCCESS_TEXT);

        // 5 seconds later, with no further mutations, nothing is shown.
        assert_eq!(Banner::for_app(&app, now + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_failure_outranks_success_notice() {
        let mut app = test_app();
        let now = Instant::now();
        app.success_notice = Some(now + SUCCESS_NOTICE_TTL);
        app.mutations.update = MutationStatus::Failed("Failed to update post: 500".to_string());

        let banner = Banner::for_app(&app, now).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.text.contains("Failed to update post"));
    }

    #[test]
    fn test_validation_error_outranks_everything() {
        let mut app = test_app();
        app.mutations.add = MutationStatus::Failed("Failed to add post: 500".to_string());
        app.validation_error = Some("user id must be a positive integer".to_string());

        let banner = Banner::for_app(&app, Instant::now()).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.text.starts_with("Invalid submission:"));
    }
}
