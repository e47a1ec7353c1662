//! # TitleBar Component
//!
//! Top status bar: service host, status message, and a busy marker while
//! any mutation is in flight. Purely presentational - all three fields
//! are props, so it renders whatever it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Host of the posts service (e.g. "jsonplaceholder.typicode.com")
    pub service_label: String,
    /// Status message (e.g. "Sending add request", "100 posts")
    pub status_message: String,
    /// Whether any mutation is currently pending
    pub busy: bool,
}

impl TitleBar {
    pub fn new(service_label: String, status_message: String, busy: bool) -> Self {
        Self {
            service_label,
            status_message,
            busy,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.busy {
            format!(
                "Postdeck ({}) | {} | …working",
                self.service_label, self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Postdeck ({})", self.service_label)
        } else {
            format!("Postdeck ({}) | {}", self.service_label, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_service_and_status() {
        let mut title_bar = TitleBar::new(
            "jsonplaceholder.typicode.com".to_string(),
            "100 posts".to_string(),
            false,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Postdeck (jsonplaceholder.typicode.com)"));
        assert!(text.contains("100 posts"));
        assert!(!text.contains("…working"));
    }

    #[test]
    fn test_title_bar_busy_marker() {
        let mut title_bar = TitleBar::new(
            "localhost:3000".to_string(),
            "Sending add request".to_string(),
            true,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("…working"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new("localhost:3000".to_string(), String::new(), false);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Postdeck (localhost:3000)"));
        assert!(!text.contains('|'));
    }
}
