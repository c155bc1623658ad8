mod vocabulary_source_port;

pub use vocabulary_source_port::VocabularySourcePort;

#[cfg(test)]
pub mod mocks {
    pub use super::vocabulary_source_port::mock::MockVocabularySource;
}
