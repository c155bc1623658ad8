//! Word-list view-model service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::Vocabulary;
use crate::domain::errors::VocabularyError;
use crate::domain::ports::VocabularySourcePort;

/// Model change notification emitted by [`WordListService`].
///
/// The UI event loop consumes these from the channel handed out by
/// [`WordListService::subscribe`] and re-renders the affected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum WordListEvent {
    /// The vocabulary collection was loaded from the source.
    Loaded { count: usize },

    /// The memorized flag of one entry changed.
    MemorizeChanged { index: usize, memorized: bool },
}

/// View-model for the word-list screen.
///
/// Holds the in-memory vocabulary collection, mutates it on behalf of the
/// view, and reports every change on a unidirectional event channel. The
/// vocabulary source is injected, so tests run against a mock port.
pub struct WordListService {
    source: Arc<dyn VocabularySourcePort>,
    items: Vec<Vocabulary>,
    events: mpsc::UnboundedSender<WordListEvent>,
}

impl WordListService {
    /// Creates a service backed by the given vocabulary source.
    #[must_use]
    pub fn new(source: Arc<dyn VocabularySourcePort>) -> Self {
        // Events are dropped until a subscriber attaches.
        let (events, _) = mpsc::unbounded_channel();

        Self {
            source,
            items: Vec::new(),
            events,
        }
    }

    /// Subscribes to model change events.
    ///
    /// The screen is the single consumer; subscribing again replaces any
    /// previous subscription.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<WordListEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = tx;
        rx
    }

    /// Loads the vocabulary collection from the source and emits
    /// [`WordListEvent::Loaded`].
    ///
    /// # Errors
    ///
    /// Returns whatever [`VocabularyError`] the source reports. The
    /// collection keeps its previous contents and nothing is emitted in
    /// that case.
    pub async fn fetch_vocabulary(&mut self) -> Result<usize, VocabularyError> {
        let items = self.source.fetch().await?;

        self.items = items;
        let count = self.items.len();
        debug!(count, "Vocabulary loaded from source");

        let _ = self.events.send(WordListEvent::Loaded { count });

        Ok(count)
    }

    /// Returns the number of vocabulary entries currently held.
    #[must_use]
    pub fn vocabulary_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the entry at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn vocabulary(&self, index: usize) -> Option<&Vocabulary> {
        self.items.get(index)
    }

    /// Returns all entries in collection order.
    #[must_use]
    pub fn vocabularies(&self) -> &[Vocabulary] {
        &self.items
    }

    /// Returns how many entries are currently memorized.
    #[must_use]
    pub fn memorized_count(&self) -> usize {
        self.items.iter().filter(|v| v.is_memorized()).count()
    }

    /// Flips the memorized flag of the entry at `index` and emits
    /// [`WordListEvent::MemorizeChanged`].
    ///
    /// Returns the new flag value, or `None` when `index` is out of
    /// bounds, in which case nothing changes and nothing is emitted.
    pub fn toggle_memorized(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        let memorized = item.toggle_memorized();
        debug!(index, memorized, "Memorize state toggled");

        let _ = self
            .events
            .send(WordListEvent::MemorizeChanged { index, memorized });

        Some(memorized)
    }
}
