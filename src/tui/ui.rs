use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, Screen};
use crate::syllables::Navigator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SetupScreen, TitleBar};

/// Draws one frame: title bar on top, the active screen below.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize, now: Instant) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let progress = app
        .navigator
        .as_ref()
        .filter(|_| app.screen == Screen::Reading)
        .and_then(|nav| Some((nav.ordinal()? + 1, nav.total_syllables())));
    TitleBar::new(
        app.provider_name().to_string(),
        app.status_message.clone(),
        progress,
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Setup => {
            SetupScreen {
                story_box: &mut tui.story_box,
                error: app.error.as_deref(),
                is_loading: app.is_loading,
                spinner_frame,
            }
            .render(frame, main_area);
        }
        Screen::Reading => {
            if let Some(view) = tui.reading.as_mut() {
                view.position = app.navigator.as_ref().and_then(Navigator::position);
                view.now = now;
                view.render(frame, main_area);
            }
        }
    }
}
