//! Vocabulary source port definition.

use async_trait::async_trait;

use crate::domain::entities::Vocabulary;
use crate::domain::errors::VocabularyError;

/// Port for loading the vocabulary set of the current wordbook.
#[async_trait]
pub trait VocabularySourcePort: Send + Sync {
    /// Fetches all vocabulary entries from the source.
    async fn fetch(&self) -> Result<Vec<Vocabulary>, VocabularyError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock vocabulary source for testing.
    pub struct MockVocabularySource {
        items: Vec<Vocabulary>,
        failing: bool,
        fetch_count: AtomicUsize,
    }

    impl MockVocabularySource {
        /// Creates a mock source yielding the given entries.
        pub fn with_items(items: Vec<Vocabulary>) -> Self {
            Self {
                items,
                failing: false,
                fetch_count: AtomicUsize::new(0),
            }
        }

        /// Creates a mock source whose fetch always fails.
        pub fn failing() -> Self {
            Self {
                items: Vec::new(),
                failing: true,
                fetch_count: AtomicUsize::new(0),
            }
        }

        /// Returns how many times fetch was called.
        pub fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    impl Default for MockVocabularySource {
        fn default() -> Self {
            Self::with_items(Vec::new())
        }
    }

    #[async_trait]
    impl VocabularySourcePort for MockVocabularySource {
        async fn fetch(&self) -> Result<Vec<Vocabulary>, VocabularyError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);

            if self.failing {
                return Err(VocabularyError::source_unavailable("mock source offline"));
            }

            Ok(self.items.clone())
        }
    }
}
