use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Banner, TitleBar};

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    now: Instant,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let form_height = tui.post_form.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(form_height)]);
    let [title_area, banner_area, list_area, form_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.service_label.clone(),
        app.status_message.clone(),
        app.mutations.any_pending(),
    );
    title_bar.render(frame, title_area);

    // Which banner to show (if any) is recomputed against `now` every
    // frame; nothing mutates state to hide it later.
    if let Some(mut banner) = Banner::for_app(app, now) {
        banner.render(frame, banner_area);
    }

    tui.post_list
        .render(frame, list_area, &app.collection, spinner_frame);
    tui.post_form.render(frame, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{MutationStatus, SUCCESS_NOTICE_TTL};
    use crate::test_support::{post, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, now: Instant) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, now, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_smoke() {
        let app = test_app();
        let text = render_to_text(&app, Instant::now());
        assert!(text.contains("Postdeck (stub.local)"));
        assert!(text.contains("Perform Action"));
        assert!(text.contains("Loading posts..."));
    }

    #[test]
    fn test_draw_ui_shows_posts_and_success_banner() {
        let mut app = test_app();
        let now = Instant::now();
        app.collection.items = vec![post(101, "fresh", "body")];
        app.collection.phase = crate::core::state::CollectionPhase::Ready;
        app.success_notice = Some(now + SUCCESS_NOTICE_TTL);

        let text = render_to_text(&app, now);
        assert!(text.contains("#101 fresh"));
        assert!(text.contains("Action completed successfully!"));
    }

    #[test]
    fn test_draw_ui_shows_failure_banner() {
        let mut app = test_app();
        app.mutations.delete = MutationStatus::Failed("Failed to delete post: 500".to_string());
        let text = render_to_text(&app, Instant::now());
        assert!(text.contains("Failed to delete post"));
    }
}
