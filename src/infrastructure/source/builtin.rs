//! Builtin in-memory vocabulary source.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Vocabulary;
use crate::domain::errors::VocabularyError;
use crate::domain::ports::VocabularySourcePort;

/// In-process vocabulary source seeded with a fixed English word set.
///
/// Stands in for a real wordbook backend: fetches are instant and the set
/// does not change between fetches.
pub struct BuiltinWordbook {
    items: Vec<Vocabulary>,
}

impl BuiltinWordbook {
    /// Creates the default wordbook.
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(default_word_set())
    }

    /// Creates a wordbook serving the given entries.
    #[must_use]
    pub fn with_items(items: Vec<Vocabulary>) -> Self {
        Self { items }
    }
}

impl Default for BuiltinWordbook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VocabularySourcePort for BuiltinWordbook {
    async fn fetch(&self) -> Result<Vec<Vocabulary>, VocabularyError> {
        for (index, item) in self.items.iter().enumerate() {
            if item.name().trim().is_empty() {
                return Err(VocabularyError::invalid_entry(format!(
                    "entry {index} has an empty name"
                )));
            }
            if item.definition().trim().is_empty() {
                return Err(VocabularyError::invalid_entry(format!(
                    "entry '{}' has an empty definition",
                    item.name()
                )));
            }
        }

        debug!(count = self.items.len(), "Serving builtin wordbook");
        Ok(self.items.clone())
    }
}

fn default_word_set() -> Vec<Vocabulary> {
    vec![
        Vocabulary::new("ephemeral", "lasting for a markedly brief time"),
        Vocabulary::new("ubiquitous", "present or found everywhere").with_memorized(true),
        Vocabulary::new("gregarious", "fond of company; sociable"),
        Vocabulary::new("laconic", "using very few words"),
        Vocabulary::new("pragmatic", "dealing with things sensibly and realistically")
            .with_memorized(true),
        Vocabulary::new("obfuscate", "to make unclear or unintelligible"),
        Vocabulary::new("serendipity", "finding something good without looking for it"),
        Vocabulary::new("taciturn", "reserved in speech; saying little"),
        Vocabulary::new("juxtapose", "to place side by side for contrast"),
        Vocabulary::new("alacrity", "brisk and cheerful readiness"),
        Vocabulary::new("perfunctory", "carried out with a minimum of effort"),
        Vocabulary::new("idiosyncrasy", "a habit peculiar to an individual").with_memorized(true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_wordbook_fetches_full_set() {
        let source = BuiltinWordbook::new();

        let items = source.fetch().await.unwrap();

        assert_eq!(items.len(), 12);
        assert_eq!(items[0].name(), "ephemeral");
        assert!(items.iter().any(Vocabulary::is_memorized));
        assert!(items.iter().any(|v| !v.is_memorized()));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_name() {
        let source = BuiltinWordbook::with_items(vec![
            Vocabulary::new("valid", "a fine word"),
            Vocabulary::new("  ", "blank name"),
        ]);

        let result = source.fetch().await;

        assert!(matches!(result, Err(VocabularyError::InvalidEntry { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_definition() {
        let source = BuiltinWordbook::with_items(vec![Vocabulary::new("orphan", "")]);

        let result = source.fetch().await;

        assert!(matches!(result, Err(VocabularyError::InvalidEntry { .. })));
    }
}
