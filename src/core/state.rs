//! # Application State
//!
//! Core business state for Kitty Reader. Domain logic only; no TUI types.
//! Presentation state (scroll, animation, layout caches) lives in `tui`.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn SyllabificationProvider>  // text → syllables
//! ├── screen: Screen                // Setup or Reading
//! ├── raw_text: String              // last submitted (or initial) text
//! ├── navigator: Option<Navigator>  // present only while reading
//! ├── is_loading: bool              // waiting for the provider
//! ├── error: Option<String>         // user-visible failure message
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::inference::SyllabificationProvider;
use crate::syllables::Navigator;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Reading,
}

pub struct App {
    pub provider: Arc<dyn SyllabificationProvider>,
    pub screen: Screen,
    pub raw_text: String,
    /// Rebuilt from scratch whenever a new text is installed.
    pub navigator: Option<Navigator>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn SyllabificationProvider>, initial_text: String) -> Self {
        Self {
            provider,
            screen: Screen::Setup,
            raw_text: initial_text,
            navigator: None,
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Kitty Reader!"),
        }
    }

    pub fn from_config(provider: Arc<dyn SyllabificationProvider>, config: &ResolvedConfig) -> Self {
        Self::new(provider, config.initial_text.clone())
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
