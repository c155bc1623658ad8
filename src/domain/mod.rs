//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Category, Vocabulary};
pub use errors::VocabularyError;
pub use ports::VocabularySourcePort;
