//! # TitleBar Component
//!
//! Top status line showing the provider, status message and reading progress.
//!
//! ## Responsibilities
//!
//! - Display the active provider name
//! - Display status messages (e.g., "Syllabifying with gemini...")
//! - Show `n/total` syllable progress while reading
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("local".into(), "12 syllables".into(), Some((3, 12)));
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Reading**: `"Kitty Reader (provider: local) | 12 syllables | 3/12"`
//! 2. **Status message**: `"Kitty Reader (provider: local) | Welcome!"`
//! 3. **Default**: `"Kitty Reader (provider: local)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// # Props
///
/// - `provider_name`: name of the active syllabification provider
/// - `status_message`: transient status
/// - `progress`: 1-based current syllable and total, while reading
pub struct TitleBar {
    pub provider_name: String,
    pub status_message: String,
    pub progress: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(
        provider_name: String,
        status_message: String,
        progress: Option<(usize, usize)>,
    ) -> Self {
        Self {
            provider_name,
            status_message,
            progress,
        }
    }

    fn text(&self) -> String {
        let mut title = format!("Kitty Reader (provider: {})", self.provider_name);
        if !self.status_message.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.status_message);
        }
        if let Some((current, total)) = self.progress {
            title.push_str(&format!(" | {current}/{total}"));
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
