//! UI screens.

mod app;
mod word_list_screen;

pub use app::App;
pub use word_list_screen::{WordListFocus, WordListKeyResult, WordListScreen, WordListScreenState};
