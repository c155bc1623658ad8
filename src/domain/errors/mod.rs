//! Domain error types.

mod vocabulary_error;

pub use vocabulary_error::VocabularyError;
