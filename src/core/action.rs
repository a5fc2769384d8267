//! # Actions
//!
//! Everything that can happen in Kitty Reader becomes an `Action`.
//! User presses Enter on the setup screen? That's `Action::Submit(text)`.
//! The provider answers? That's `Action::ProcessingDone(words)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Screen};
use crate::syllables::{Navigator, ProcessedText};

/// Shown when the provider fails. Prior state stays as it was.
pub const PROCESSING_ERROR_MESSAGE: &str =
    "Could not process the text. Please check your API key and try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start reading the given raw text.
    Submit(String),
    /// The provider produced a structured text.
    ProcessingDone(ProcessedText),
    /// The provider failed; carries the technical reason for the log.
    ProcessingFailed(String),
    NextSyllable,
    PreviousSyllable,
    /// Leave the reading screen and go back to editing the text.
    GoBack,
    Quit,
}

/// Work the event loop must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the provider over this text in the background.
    SpawnProcessing(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {}", describe(&action));
    match action {
        Action::Submit(text) => {
            if app.is_loading {
                debug!("Ignoring submit while loading");
                return Effect::None;
            }
            if text.trim().is_empty() {
                debug!("Ignoring blank submit");
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.raw_text = text.clone();
            app.status_message = format!("Syllabifying with {}...", app.provider_name());
            Effect::SpawnProcessing(text)
        }
        Action::ProcessingDone(words) => {
            info!("Installing processed text: {} words", words.len());
            let navigator = Navigator::new(words);
            app.status_message = format!("{} syllables", navigator.total_syllables());
            app.navigator = Some(navigator);
            app.screen = Screen::Reading;
            app.is_loading = false;
            app.error = None;
            Effect::None
        }
        Action::ProcessingFailed(reason) => {
            warn!("Processing failed: {}", reason);
            app.is_loading = false;
            app.error = Some(PROCESSING_ERROR_MESSAGE.to_string());
            app.status_message = String::from("Processing failed");
            Effect::None
        }
        Action::NextSyllable => {
            if let Some(nav) = app.navigator.as_mut() {
                nav.next();
            }
            Effect::None
        }
        Action::PreviousSyllable => {
            if let Some(nav) = app.navigator.as_mut() {
                nav.previous();
            }
            Effect::None
        }
        Action::GoBack => {
            app.screen = Screen::Setup;
            app.navigator = None;
            app.status_message = String::new();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Short log form; processed texts can be long.
fn describe(action: &Action) -> String {
    match action {
        Action::Submit(text) => format!("Submit({} chars)", text.chars().count()),
        Action::ProcessingDone(words) => format!("ProcessingDone({} words)", words.len()),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllables::{CurrentPosition, process};
    use crate::test_support::test_app;

    fn reading_app(text: &str) -> App {
        let mut app = test_app();
        update(&mut app, Action::Submit(text.to_string()));
        update(&mut app, Action::ProcessingDone(process(text)));
        app
    }

    fn position(app: &App) -> Option<CurrentPosition> {
        app.navigator.as_ref().and_then(Navigator::position)
    }

    #[test]
    fn test_submit_spawns_processing() {
        let mut app = test_app();
        app.error = Some("old".to_string());
        let effect = update(&mut app, Action::Submit("Мама".to_string()));
        assert_eq!(effect, Effect::SpawnProcessing("Мама".to_string()));
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.raw_text, "Мама");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  \n ".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Submit("one".to_string()));
        let effect = update(&mut app, Action::Submit("two".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.raw_text, "one");
    }

    #[test]
    fn test_processing_done_installs_fresh_navigator() {
        let app = reading_app("Привет, мир!");
        assert_eq!(app.screen, Screen::Reading);
        assert!(!app.is_loading);
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 0)));
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = reading_app("Привет, мир!");
        update(&mut app, Action::NextSyllable);
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 1)));
        update(&mut app, Action::NextSyllable);
        update(&mut app, Action::NextSyllable);
        assert_eq!(position(&app), Some(CurrentPosition::new(1, 0)));
        update(&mut app, Action::PreviousSyllable);
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 1)));
    }

    #[test]
    fn test_navigation_without_text_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::NextSyllable), Effect::None);
        assert_eq!(update(&mut app, Action::PreviousSyllable), Effect::None);
        assert!(app.navigator.is_none());
    }

    #[test]
    fn test_failure_keeps_prior_reading_state() {
        let mut app = reading_app("Привет, мир!");
        update(&mut app, Action::NextSyllable);

        // A new submission fails: the previous text and cursor survive
        update(&mut app, Action::Submit("Котёнок".to_string()));
        update(&mut app, Action::ProcessingFailed("boom".to_string()));

        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some(PROCESSING_ERROR_MESSAGE));
        assert_eq!(app.screen, Screen::Reading);
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 1)));
    }

    #[test]
    fn test_failure_on_setup_stays_on_setup() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Котёнок".to_string()));
        update(&mut app, Action::ProcessingFailed("network".to_string()));
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.navigator.is_none());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_go_back_discards_navigator_keeps_text() {
        let mut app = reading_app("Привет, мир!");
        update(&mut app, Action::GoBack);
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.navigator.is_none());
        assert_eq!(app.raw_text, "Привет, мир!");
    }

    #[test]
    fn test_resubmit_resets_position() {
        let mut app = reading_app("Привет, мир!");
        update(&mut app, Action::NextSyllable);
        update(&mut app, Action::GoBack);
        update(&mut app, Action::Submit("Котёнок".to_string()));
        update(&mut app, Action::ProcessingDone(process("Котёнок")));
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 0)));
    }

    #[test]
    fn test_empty_processed_text_has_no_position() {
        let mut app = test_app();
        update(&mut app, Action::ProcessingDone(Vec::new()));
        assert_eq!(app.screen, Screen::Reading);
        assert_eq!(position(&app), None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
