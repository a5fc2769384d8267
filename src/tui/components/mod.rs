//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line (provider, status, progress)
//! - `SetupScreen`: title, story box, start button; borrows the `StoryBox`
//!
//! ### Stateful Components
//!
//! - `StoryBox`: multi-line text field, emits `StoryEvent`
//! - `ReadingView`: one-line reading strip with layout cache and mascot
//!
//! Each component file holds its state, events, rendering and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── setup_screen.rs    (text entry screen)
//! ├── reading_screen.rs  (syllable-by-syllable reading)
//! ├── mascot.rs          (hop animation math)
//! └── story_box/         (text field + wrapping helpers)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod mascot;
pub mod reading_screen;
pub mod setup_screen;
pub mod story_box;
pub use reading_screen::ReadingView;
pub use setup_screen::SetupScreen;
pub use story_box::{StoryBox, StoryEvent};
