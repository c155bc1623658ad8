//! Presentation layer with the word-list screen and its widgets.

/// Event handling.
pub mod events;
/// UI screens and the application orchestrator.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
