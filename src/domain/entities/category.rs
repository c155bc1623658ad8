//! Wordbook category entity.

/// A wordbook category shown in the slide-out sidebar. Categories are a
/// static label list with no lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
}

impl Category {
    /// Creates a new category with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the category label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
