//! # StoryBox Component
//!
//! Multi-line text field on the setup screen where the story is typed or
//! pasted.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, bracketed paste, Ctrl+J for a newline)
//! - Handle Backspace
//! - Emit `Start` on Enter when there is something to read
//!
//! The cursor always sits at the end of the buffer. The
//! buffer is kept after submitting, so going back from the reading screen
//! shows the same story ready for editing.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, MIN_VISIBLE_LINES, VERTICAL_OVERHEAD,
    end_column, inner_width, prev_char_boundary, wrapped_lines,
};

/// High-level events emitted by the StoryBox
#[derive(Debug, Clone, PartialEq)]
pub enum StoryEvent {
    /// User asked to start reading this text (Enter pressed)
    Start(String),
    /// Text content changed
    ContentChanged,
}

/// # Props
///
/// - `locked`: input is ignored while the text is being processed
///
/// # State
///
/// - `buffer`: the story text
pub struct StoryBox {
    pub buffer: String,
    pub locked: bool,
}

impl StoryBox {
    pub fn new(initial_text: String) -> Self {
        Self {
            buffer: initial_text,
            locked: false,
        }
    }

    /// Whether Enter would start reading.
    pub fn can_start(&self) -> bool {
        !self.locked && !self.buffer.trim().is_empty()
    }

    /// Required height for the current buffer, clamped to viewport limits.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let lines = wrapped_lines(&self.buffer, width).len() as u16;
        lines.clamp(MIN_VISIBLE_LINES, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }
}

impl Component for StoryBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let lines = wrapped_lines(&self.buffer, width);
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);

        // Keep the end of the text (where the cursor is) in view
        let scroll = (lines.len() as u16).saturating_sub(visible);

        let border_style = if self.locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title("Your story");

        let text_style = if self.locked {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        let paragraph = Paragraph::new(lines.join("\n"))
            .block(block)
            .style(text_style)
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        if !self.locked {
            let row = (lines.len() as u16).saturating_sub(1).saturating_sub(scroll);
            let col = end_column(&self.buffer, width);
            frame.set_cursor_position((
                area.x + CONTENT_OFFSET_X + col,
                area.y + CONTENT_OFFSET_Y + row,
            ));
        }
    }
}

impl EventHandler for StoryBox {
    type Event = StoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.locked {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(StoryEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Some terminals paste CRLF line endings
                self.buffer.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                Some(StoryEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.buffer.is_empty() {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.buffer.len());
                self.buffer.truncate(prev);
                Some(StoryEvent::ContentChanged)
            }
            TuiEvent::Submit => self
                .can_start()
                .then(|| StoryEvent::Start(self.buffer.clone())),
            _ => None,
        }
    }
}
