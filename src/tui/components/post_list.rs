//! # PostList Component
//!
//! The collection view: a scrollable stack of post cards. The collection
//! itself is a prop (owned by `App`); only the scroll position lives
//! here.
//!
//! Rendering per phase:
//! - `Loading`: spinner line above whatever items are cached.
//! - `Error`: the failure message in red, cached items still listed.
//! - `Ready`: just the cards. An empty collection renders an empty view -
//!   this is the defensive fallback for a malformed list payload, not an
//!   error state.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Post;
use crate::core::state::{Collection, CollectionPhase};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedCard<'a> {
    fn new(post: &'a Post, content_width: u16) -> Self {
        let title = format!("#{} {}", post.id, post.title);
        let border_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::DIM);

        let paragraph = Paragraph::new(post.body.as_str())
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true });

        let inner_width = content_width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        RenderedCard { paragraph, height }
    }
}

/// Scrollable list over the cached collection snapshot.
#[derive(Default)]
pub struct PostList {
    pub scroll_state: ScrollViewState,
}

impl PostList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        collection: &Collection,
        spinner_frame: usize,
    ) {
        let mut area = area;

        // Phase line sits above the cards and is not part of the scroll.
        match &collection.phase {
            CollectionPhase::Loading => {
                let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
                frame.render_widget(
                    Span::styled(
                        format!("{spinner} Loading posts..."),
                        Style::default().fg(Color::Yellow),
                    ),
                    Rect { height: 1, ..area },
                );
                area.y += 1;
                area.height = area.height.saturating_sub(1);
            }
            CollectionPhase::Error(message) => {
                frame.render_widget(
                    Span::styled(message.as_str(), Style::default().fg(Color::Red)),
                    Rect { height: 1, ..area },
                );
                area.y += 1;
                area.height = area.height.saturating_sub(1);
            }
            CollectionPhase::Ready => {}
        }

        if collection.items.is_empty() {
            return;
        }

        let content_width = area.width.saturating_sub(1);
        let cards: Vec<RenderedCard> = collection
            .items
            .iter()
            .map(|post| RenderedCard::new(post, content_width))
            .collect();
        let total_height: u16 = cards.iter().map(|c| c.height).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in &cards {
            let card_rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph.clone(), card_rect);
            y_offset += card.height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.scroll_state);
    }
}

impl EventHandler for PostList {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::post;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(collection: &Collection) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = PostList::new();
        terminal
            .draw(|f| list.render(f, f.area(), collection, 0))
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
    fn test_ready_collection_renders_cards_in_remote_order() {
        let collection = Collection {
            phase: CollectionPhase::Ready,
            items: vec![post(2, "second title", "b"), post(1, "first title", "a")],
        };
        let text = render_to_text(&collection);
        assert!(text.contains("#2 second title"));
        assert!(text.contains("#1 first title"));
        let second = text.find("#2 second title").unwrap();
        let first = text.find("#1 first title").unwrap();
        assert!(second < first, "remote order must be preserved");
    }

    #[test]
    fn test_loading_shows_spinner_line() {
        let collection = Collection::new();
        let text = render_to_text(&collection);
        assert!(text.contains("Loading posts..."));
    }

    #[test]
    fn test_error_keeps_cached_items_visible() {
        let collection = Collection {
            phase: CollectionPhase::Error("Failed to fetch posts: boom".to_string()),
            items: vec![post(1, "cached", "still here")],
        };
        let text = render_to_text(&collection);
        assert!(text.contains("Failed to fetch posts: boom"));
        assert!(text.contains("#1 cached"));
    }

    #[test]
    fn test_empty_ready_collection_renders_empty_view() {
        let collection = Collection {
            phase: CollectionPhase::Ready,
            items: Vec::new(),
        };
        let text = render_to_text(&collection);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_scroll_events_are_consumed() {
        let mut list = PostList::new();
        assert_eq!(list.handle_event(&TuiEvent::ScrollDown), Some(()));
        assert_eq!(list.handle_event(&TuiEvent::ScrollUp), Some(()));
        assert_eq!(list.handle_event(&TuiEvent::Submit), None);
    }
}
