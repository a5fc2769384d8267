//! # Reading Screen
//!
//! Shows the whole text on one line, highlights the current word and
//! syllable, and keeps the current word centered by scrolling sideways.
//!
//! ```text
//!                 🐱
//!    ПРИ-ВЕТ,    [МИР!]    КАК    ДЕ-ЛА?
//!        Use ← & → keys to read. Esc to go back.
//! ```
//!
//! ## Layout cache
//!
//! `ReadingLayout` maps every word id and syllable id to its column span on
//! the line. It is built once per text (the text never changes while
//! reading) and is what the scroll offset and mascot target are computed
//! from.

use std::collections::HashMap;
use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::syllables::{CurrentPosition, ProcessedText, Word};
use crate::tui::component::Component;
use crate::tui::components::mascot::{MAX_JUMP, Mascot};

/// Spaces between two words.
pub const WORD_GAP: usize = 4;
const HYPHEN: &str = "-";
const MASCOT: &str = "🐱";
const MASCOT_WIDTH: usize = 2;
const MASCOT_ROWS: u16 = MAX_JUMP as u16 + 1;
pub const READING_HINT: &str = "Use ← & → keys to read. Esc to go back.";

/// Columns occupied by a word or syllable, relative to the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub width: usize,
}

impl ColumnSpan {
    fn center(&self) -> f32 {
        self.start as f32 + self.width as f32 / 2.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReadingLayout {
    words: HashMap<String, ColumnSpan>,
    syllables: HashMap<String, ColumnSpan>,
    total_width: usize,
}

impl ReadingLayout {
    pub fn build(text: &[Word]) -> Self {
        let mut layout = Self::default();
        let mut column = 0;

        for (i, word) in text.iter().enumerate() {
            if i > 0 {
                column += WORD_GAP;
            }
            let word_start = column;
            for (j, syllable) in word.syllables.iter().enumerate() {
                if j > 0 {
                    column += HYPHEN.width();
                }
                let width = syllable.text.width();
                layout.syllables.insert(
                    syllable.id.clone(),
                    ColumnSpan {
                        start: column,
                        width,
                    },
                );
                column += width;
            }
            layout.words.insert(
                word.id.clone(),
                ColumnSpan {
                    start: word_start,
                    width: column - word_start,
                },
            );
        }

        layout.total_width = column;
        layout
    }

    pub fn word(&self, id: &str) -> Option<ColumnSpan> {
        self.words.get(id).copied()
    }

    pub fn syllable(&self, id: &str) -> Option<ColumnSpan> {
        self.syllables.get(id).copied()
    }

    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Horizontal scroll that puts `word` in the middle of a `viewport`
    /// columns wide window, clamped to the line.
    pub fn scroll_for(&self, word: ColumnSpan, viewport: usize) -> usize {
        if self.total_width <= viewport {
            return 0;
        }
        let center = word.start + word.width / 2;
        center
            .saturating_sub(viewport / 2)
            .min(self.total_width - viewport)
    }
}

/// # Props
///
/// - `position`: the navigator cursor (`None` for an empty text)
/// - `now`: frame timestamp driving the mascot animation
///
/// # State
///
/// - `text` and its `layout`, fixed for the lifetime of the view
/// - `mascot`: hop animation
pub struct ReadingView {
    text: ProcessedText,
    layout: ReadingLayout,
    mascot: Mascot,
    pub position: Option<CurrentPosition>,
    pub now: Instant,
}

impl ReadingView {
    pub fn new(text: ProcessedText) -> Self {
        let layout = ReadingLayout::build(&text);
        Self {
            text,
            layout,
            mascot: Mascot::new(),
            position: None,
            now: Instant::now(),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.mascot.is_animating(now)
    }

    fn line(&self) -> Line<'static> {
        let highlight = Style::default().bg(Color::Rgb(60, 56, 90));
        let current = highlight
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let hyphen = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::DIM);

        let mut spans = Vec::new();
        for (wi, word) in self.text.iter().enumerate() {
            if wi > 0 {
                spans.push(Span::raw(" ".repeat(WORD_GAP)));
            }
            let is_current_word = self.position.is_some_and(|p| p.word_index == wi);
            for (si, syllable) in word.syllables.iter().enumerate() {
                if si > 0 {
                    let style = if is_current_word {
                        hyphen.patch(highlight)
                    } else {
                        hyphen
                    };
                    spans.push(Span::styled(HYPHEN, style));
                }
                let style = match self.position {
                    Some(p) if p.word_index == wi && p.syllable_index == si => current,
                    Some(p) if p.word_index == wi => highlight.fg(Color::White),
                    _ => Style::default().fg(Color::Gray),
                };
                spans.push(Span::styled(syllable.text.clone(), style));
            }
        }
        Line::from(spans)
    }
}

impl Component for ReadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [mascot_area, text_area, _, hint_area] = Layout::vertical([
            Constraint::Length(MASCOT_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(READING_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );

        let current = self.position.and_then(|p| {
            let word = self.text.get(p.word_index)?;
            let syllable = word.syllables.get(p.syllable_index)?;
            Some((
                self.layout.word(&word.id)?,
                self.layout.syllable(&syllable.id)?,
            ))
        });

        let viewport = text_area.width as usize;
        let total = self.layout.total_width();
        let (line_x, scroll) = if total <= viewport {
            (text_area.x as usize + (viewport - total) / 2, 0)
        } else {
            let scroll = current
                .map(|(word, _)| self.layout.scroll_for(word, viewport))
                .unwrap_or(0);
            (text_area.x as usize, scroll)
        };

        let line_area = Rect {
            x: line_x as u16,
            width: total.min(viewport) as u16,
            ..text_area
        };
        frame.render_widget(
            Paragraph::new(self.line()).scroll((0, scroll as u16)),
            line_area,
        );

        let Some((_, syllable)) = current else {
            return;
        };
        let target = syllable.center() - MASCOT_WIDTH as f32 / 2.0;
        self.mascot.move_to(target, self.now);
        let pose = self.mascot.position(self.now);

        let col = line_x as f32 + pose.x - scroll as f32;
        let lift = (pose.lift.round() as u16).min(mascot_area.height.saturating_sub(1));
        let row = (mascot_area.y + mascot_area.height).saturating_sub(1 + lift);
        if col >= area.x as f32 && col + MASCOT_WIDTH as f32 <= area.right() as f32 {
            frame
                .buffer_mut()
                .set_string(col.round() as u16, row, MASCOT, Style::default());
        }
    }
}
