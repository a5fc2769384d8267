//! # Setup Screen
//!
//! Where the story gets typed or pasted before reading starts.
//!
//! ```text
//!                🐱 Kitty Reader
//!   Paste a story below and press Enter to begin...
//!   ╭ Your story ──────────────────────────────╮
//!   │ Привет, как дела?                        │
//!   ╰──────────────────────────────────────────╯
//!   (error line, red, only after a failure)
//!              [ Start reading ⏎ ]
//!   Enter: start · Ctrl+J: new line · Ctrl+C: quit
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::story_box::StoryBox;

pub const TITLE: &str = "🐱 Kitty Reader";
pub const SUBTITLE: &str = "Paste a story below and press Enter to begin the adventure!";
const HINTS: &str = "Enter: start · Ctrl+J: new line · Ctrl+C: quit";
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const MAX_WIDTH: u16 = 72;

/// # Props
///
/// - `story_box`: the text field (owned by TUI state, borrowed for the frame)
/// - `error`: message from the last failed attempt
/// - `is_loading`: the provider is working; shows a spinner
/// - `spinner_frame`: animation tick
pub struct SetupScreen<'a> {
    pub story_box: &'a mut StoryBox,
    pub error: Option<&'a str>,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl SetupScreen<'_> {
    fn button_text(&self) -> (String, Style) {
        if self.is_loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            (
                format!("{frame} Syllabifying..."),
                Style::default().fg(Color::Cyan),
            )
        } else if self.story_box.can_start() {
            (
                "[ Start reading ⏎ ]".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "[ Start reading ⏎ ]".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        }
    }
}

impl Component for SetupScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Length(area.width.min(MAX_WIDTH))])
            .flex(Flex::Center)
            .areas(area);

        let story_height = self.story_box.calculate_height(column.width);
        let [title, subtitle, _, story, error, button, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(story_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(
            Paragraph::new(TITLE)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            title,
        );
        frame.render_widget(
            Paragraph::new(SUBTITLE)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Gray)),
            subtitle,
        );

        self.story_box.locked = self.is_loading;
        self.story_box.render(frame, story);

        if let Some(message) = self.error {
            frame.render_widget(
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red)),
                error,
            );
        }

        let (label, style) = self.button_text();
        frame.render_widget(
            Paragraph::new(label).alignment(Alignment::Center).style(style),
            button,
        );
        frame.render_widget(
            Paragraph::new(HINTS)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            hints,
        );
    }
}
