//! Vocabulary entry entity.

/// A single vocabulary entry: a word, its definition, and whether the
/// user has memorized it. Identity is the entry's position in the
/// word-list collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    name: String,
    definition: String,
    memorized: bool,
}

impl Vocabulary {
    /// Creates a new vocabulary entry, not yet memorized.
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            memorized: false,
        }
    }

    /// Sets the memorized flag.
    #[must_use]
    pub const fn with_memorized(mut self, memorized: bool) -> Self {
        self.memorized = memorized;
        self
    }

    /// Returns the word itself.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the word's definition.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns whether the user has memorized this word.
    #[must_use]
    pub const fn is_memorized(&self) -> bool {
        self.memorized
    }

    /// Sets the memorized flag.
    pub const fn set_memorized(&mut self, memorized: bool) {
        self.memorized = memorized;
    }

    /// Flips the memorized flag and returns the new value.
    pub const fn toggle_memorized(&mut self) -> bool {
        self.memorized = !self.memorized;
        self.memorized
    }
}
