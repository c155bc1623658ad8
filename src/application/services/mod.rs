//! Application services.

mod word_list_service;

pub use word_list_service::{WordListEvent, WordListService};
