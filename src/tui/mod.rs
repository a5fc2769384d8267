//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Keys
//!
//! | Screen  | Key                 | Action            |
//! |---------|---------------------|-------------------|
//! | any     | Ctrl+C              | Quit              |
//! | Setup   | Enter               | Submit(text)      |
//! | Setup   | typing, paste, Bksp | edit the story    |
//! | Reading | → / l / Space       | NextSyllable      |
//! | Reading | ← / h               | PreviousSyllable  |
//! | Reading | Esc                 | GoBack            |
//!
//! ## Redraw Strategy
//!
//! - **Animating** (spinner while loading, mascot mid-hop): draws every ~40ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, Screen};
use crate::inference::SyllabificationProvider;
use crate::tui::component::EventHandler;
use crate::tui::components::{ReadingView, StoryBox, StoryEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub(crate) struct TuiState {
    pub story_box: StoryBox,
    /// Present while the reading screen is showing; rebuilt per text.
    pub reading: Option<ReadingView>,
}

impl TuiState {
    pub(crate) fn new(app: &App) -> Self {
        Self {
            story_box: StoryBox::new(app.raw_text.clone()),
            reading: None,
        }
    }

    fn is_animating(&self, app: &App, now: Instant) -> bool {
        app.is_loading || self.reading.as_ref().is_some_and(|r| r.is_animating(now))
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Translates a terminal event into an action for the current screen.
///
/// Events consumed by a component without producing an action (typing into
/// the story box) return `None`.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match app.screen {
        Screen::Reading => match event {
            TuiEvent::Right | TuiEvent::InputChar('l' | ' ') => Some(Action::NextSyllable),
            TuiEvent::Left | TuiEvent::InputChar('h') => Some(Action::PreviousSyllable),
            TuiEvent::Escape => Some(Action::GoBack),
            _ => None,
        },
        Screen::Setup => match tui.story_box.handle_event(event)? {
            StoryEvent::Start(text) => Some(Action::Submit(text)),
            StoryEvent::ContentChanged => None,
        },
    }
}

/// Runs `update` and carries out its effect. Returns `true` when the app
/// should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let installs_text = matches!(action, Action::ProcessingDone(_));
    let effect = update(app, action);

    if installs_text {
        tui.reading = app
            .navigator
            .as_ref()
            .map(|nav| ReadingView::new(nav.text().clone()));
    }
    if app.screen == Screen::Setup {
        tui.reading = None;
    }

    match effect {
        Effect::Quit => true,
        Effect::SpawnProcessing(text) => {
            spawn_processing(app.provider.clone(), text, tx.clone());
            false
        }
        Effect::None => false,
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.is_animating(app, now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(40)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(app, tui, &event)
                && dispatch(app, tui, action, &tx)
            {
                info!("Quit requested");
                return Ok(());
            }
        }

        // Results from background processing
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(app, tui, action, &tx) {
                return Ok(());
            }
        }
    }
}

/// Runs the provider on a background task and reports the outcome as an
/// action on `tx`.
fn spawn_processing(
    provider: Arc<dyn SyllabificationProvider>,
    text: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!(
        "Spawning processing with provider '{}' ({} chars)",
        provider.name(),
        text.chars().count()
    );
    tokio::spawn(async move {
        let action = match provider.process(&text).await {
            Ok(words) => {
                debug!("Provider returned {} words", words.len());
                Action::ProcessingDone(words)
            }
            Err(e) => Action::ProcessingFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send processing result: receiver dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::PROCESSING_ERROR_MESSAGE;
    use crate::syllables::{CurrentPosition, Navigator, process};
    use crate::test_support::{FailingProvider, StaticProvider, test_app};

    fn reading(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) {
        let text = app.raw_text.clone();
        dispatch(app, tui, Action::Submit(text.clone()), tx);
        dispatch(app, tui, Action::ProcessingDone(process(&text)), tx);
    }

    fn position(app: &App) -> Option<CurrentPosition> {
        app.navigator.as_ref().and_then(Navigator::position)
    }

    #[test]
    fn test_force_quit_from_any_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
        app.screen = Screen::Reading;
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_setup_typing_goes_to_story_box() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::InputChar('!')), None);
        assert_eq!(tui.story_box.buffer, "Привет, мир!!");
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Submit("Привет, мир!!".to_string()))
        );
    }

    #[test]
    fn test_reading_keys() {
        let mut app = test_app();
        app.screen = Screen::Reading;
        let mut tui = TuiState::new(&app);
        for (event, action) in [
            (TuiEvent::Right, Action::NextSyllable),
            (TuiEvent::InputChar(' '), Action::NextSyllable),
            (TuiEvent::InputChar('l'), Action::NextSyllable),
            (TuiEvent::Left, Action::PreviousSyllable),
            (TuiEvent::InputChar('h'), Action::PreviousSyllable),
            (TuiEvent::Escape, Action::GoBack),
        ] {
            assert_eq!(route_event(&app, &mut tui, &event), Some(action));
        }
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::InputChar('x')), None);
        assert_eq!(tui.story_box.buffer, "Привет, мир!");
    }

    #[tokio::test]
    async fn test_dispatch_builds_and_clears_reading_view() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(&app);

        reading(&mut app, &mut tui, &tx);
        assert_eq!(app.screen, Screen::Reading);
        assert!(tui.reading.is_some());

        assert!(!dispatch(&mut app, &mut tui, Action::NextSyllable, &tx));
        assert_eq!(position(&app), Some(CurrentPosition::new(0, 1)));

        dispatch(&mut app, &mut tui, Action::GoBack, &tx);
        assert_eq!(app.screen, Screen::Setup);
        assert!(tui.reading.is_none());
        assert_eq!(tui.story_box.buffer, "Привет, мир!");
    }

    #[tokio::test]
    async fn test_dispatch_quit() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert!(dispatch(&mut app, &mut tui, Action::Quit, &tx));
    }

    #[tokio::test]
    async fn test_spawn_processing_success() {
        let (tx, rx) = mpsc::channel();
        spawn_processing(Arc::new(StaticProvider), "Мама".to_string(), tx)
            .await
            .unwrap();
        assert_eq!(rx.try_recv().unwrap(), Action::ProcessingDone(process("Мама")));
    }

    #[tokio::test]
    async fn test_spawn_processing_failure_keeps_setup() {
        let (tx, rx) = mpsc::channel();
        spawn_processing(Arc::new(FailingProvider), "Мама".to_string(), tx.clone())
            .await
            .unwrap();
        let action = rx.try_recv().unwrap();
        assert!(matches!(action, Action::ProcessingFailed(_)));

        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        dispatch(&mut app, &mut tui, Action::Submit("Мама".to_string()), &tx);
        dispatch(&mut app, &mut tui, action, &tx);
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.error.as_deref(), Some(PROCESSING_ERROR_MESSAGE));
        assert!(!app.is_loading);
        assert!(tui.reading.is_none());
    }
}
