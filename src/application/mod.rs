//! Application layer with the word-list view-model.

/// Application services.
pub mod services;

pub use services::{WordListEvent, WordListService};
