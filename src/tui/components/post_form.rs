//! # PostFormBox Component
//!
//! The action form: pick a mutation kind, fill the fields it needs,
//! submit with Enter. Field editing is append-only (type and backspace);
//! the body field is the only multi-line one (Ctrl+J inserts a newline).
//!
//! The component never validates - it captures raw strings into a
//! [`PostForm`] and hands the snapshot to the reducer on submit, where
//! `PostForm::to_request()` is the single validation point.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::form::PostForm;
use crate::core::state::MutationKind;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User pressed Enter: a raw snapshot of the current fields.
    Submit(PostForm),
    ContentChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Kind,
    PostId,
    Title,
    Body,
    UserId,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Kind => "Action",
            Field::PostId => "Post ID",
            Field::Title => "Title",
            Field::Body => "Body",
            Field::UserId => "User ID",
        }
    }
}

const KIND_ORDER: [MutationKind; 3] =
    [MutationKind::Add, MutationKind::Update, MutationKind::Delete];

/// Width of the "Label:   " prefix in front of every field value.
const LABEL_WIDTH: usize = 9;

/// The body field is clamped to this many visible lines.
const MAX_BODY_LINES: u16 = 4;

pub struct PostFormBox {
    pub form: PostForm,
    focus: Field,
}

impl Default for PostFormBox {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFormBox {
    pub fn new() -> Self {
        Self {
            form: PostForm::default(),
            focus: Field::Kind,
        }
    }

    /// The fields that apply to the currently selected kind, in Tab order.
    fn active_fields(&self) -> &'static [Field] {
        match self.form.kind {
            MutationKind::Add => &[Field::Kind, Field::Title, Field::Body, Field::UserId],
            MutationKind::Update => &[Field::Kind, Field::PostId, Field::Title, Field::Body],
            MutationKind::Delete => &[Field::Kind, Field::PostId],
        }
    }

    fn focus_step(&mut self, delta: isize) {
        let fields = self.active_fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = fields.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    fn cycle_kind(&mut self, delta: isize) {
        let current = KIND_ORDER
            .iter()
            .position(|k| *k == self.form.kind)
            .unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(KIND_ORDER.len() as isize) as usize;
        self.form.kind = KIND_ORDER[next];
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Kind => None,
            Field::PostId => Some(&mut self.form.post_id),
            Field::Title => Some(&mut self.form.title),
            Field::Body => Some(&mut self.form.body),
            Field::UserId => Some(&mut self.form.user_id),
        }
    }

    /// Clears the text fields after a dispatched submission, keeping the
    /// selected action kind.
    pub fn reset(&mut self) {
        let kind = self.form.kind;
        self.form = PostForm {
            kind,
            ..PostForm::default()
        };
    }

    fn body_lines(&self, value_width: u16) -> Vec<String> {
        wrap_value(&self.form.body, value_width)
    }

    /// Rows needed for the form at the given outer width, borders included.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let value_width = value_width(width);
        let mut rows = 0u16;
        for field in self.active_fields() {
            rows += match field {
                Field::Body => (self.body_lines(value_width).len() as u16)
                    .clamp(1, MAX_BODY_LINES),
                _ => 1,
            };
        }
        rows + 2
    }
}

/// Width left for a field value inside the borders, after the label.
fn value_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(2 + LABEL_WIDTH as u16).max(1)
}

/// Splits on explicit newlines, then word-wraps each segment.
fn wrap_value(value: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    for segment in value.split('\n') {
        if segment.is_empty() {
            lines.push(String::new());
            continue;
        }
        for wrapped in textwrap::wrap(segment, width) {
            lines.push(wrapped.into_owned());
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

impl Component for PostFormBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let value_width = value_width(area.width);
        let focused_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut lines: Vec<Line> = Vec::new();
        // (x, y) for the terminal cursor, relative to the inner area.
        let mut cursor: Option<(u16, u16)> = None;

        for field in self.active_fields() {
            let is_focused = *field == self.focus;
            let style = if is_focused { focused_style } else { label_style };
            let label = format!("{:<LABEL_WIDTH$}", format!("{}:", field.label()));

            match field {
                Field::Kind => {
                    let value = format!("< {} >", self.form.kind.label());
                    lines.push(Line::from(vec![
                        Span::styled(label, style),
                        Span::raw(value),
                        Span::styled("  (←/→ to change)", label_style),
                    ]));
                }
                Field::Body => {
                    let wrapped = self.body_lines(value_width);
                    let visible = wrapped.len().min(MAX_BODY_LINES as usize);
                    let skip = wrapped.len() - visible;
                    if is_focused {
                        let last = wrapped.last().map(String::as_str).unwrap_or("");
                        cursor = Some((
                            (LABEL_WIDTH + last.width()) as u16,
                            lines.len() as u16 + (visible as u16).saturating_sub(1),
                        ));
                    }
                    for (i, body_line) in wrapped.iter().skip(skip).enumerate() {
                        let prefix = if i == 0 {
                            Span::styled(label.clone(), style)
                        } else {
                            Span::raw(" ".repeat(LABEL_WIDTH))
                        };
                        lines.push(Line::from(vec![prefix, Span::raw(body_line.clone())]));
                    }
                }
                _ => {
                    let value = match field {
                        Field::PostId => self.form.post_id.as_str(),
                        Field::Title => self.form.title.as_str(),
                        Field::UserId => self.form.user_id.as_str(),
                        _ => unreachable!(),
                    };
                    if is_focused {
                        cursor = Some(((LABEL_WIDTH + value.width()) as u16, lines.len() as u16));
                    }
                    lines.push(Line::from(vec![
                        Span::styled(label, style),
                        Span::raw(value.to_string()),
                    ]));
                }
            }
        }

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Perform Action (Tab: field · Enter: submit · Ctrl+J: newline)");
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some((x, y)) = cursor {
            frame.set_cursor_position((
                area.x + 1 + x.min(area.width.saturating_sub(2)),
                area.y + 1 + y.min(area.height.saturating_sub(2)),
            ));
        }
    }
}

impl EventHandler for PostFormBox {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::FocusNext => {
                self.focus_step(1);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::FocusPrev => {
                self.focus_step(-1);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::CycleLeft if self.focus == Field::Kind => {
                self.cycle_kind(-1);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::CycleRight if self.focus == Field::Kind => {
                self.cycle_kind(1);
                Some(FormEvent::ContentChanged)
            }
            // Space also cycles the kind when the selector is focused.
            TuiEvent::InputChar(' ') if self.focus == Field::Kind => {
                self.cycle_kind(1);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::InputChar(c) => {
                let c = *c;
                self.focused_buffer().map(|buffer| {
                    buffer.push(c);
                    FormEvent::ContentChanged
                })
            }
            TuiEvent::Paste(text) => {
                let flattened = if self.focus == Field::Body {
                    text.clone()
                } else {
                    text.replace('\n', " ")
                };
                self.focused_buffer().map(|buffer| {
                    buffer.push_str(&flattened);
                    FormEvent::ContentChanged
                })
            }
            TuiEvent::Newline if self.focus == Field::Body => {
                self.form.body.push('\n');
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Backspace => self
                .focused_buffer()
                .and_then(|buffer| buffer.pop().map(|_| FormEvent::ContentChanged)),
            TuiEvent::Submit => Some(FormEvent::Submit(self.form.clone())),
            _ => None,
        }
    }
}
