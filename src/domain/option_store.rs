//! Ordered store of wheel options.

use tracing::debug;

/// Ordered sequence of option labels.
///
/// Insertion order is display order and slice order. Labels are trimmed and
/// never empty; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    options: Vec<String>,
}

impl OptionStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends the trimmed label. Blank labels are ignored.
    ///
    /// Returns whether an option was added.
    pub fn add(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank option");
            return false;
        }

        self.options.push(trimmed.to_string());
        debug!(label = trimmed, count = self.options.len(), "Option added");
        true
    }

    /// Removes the option at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.options.len() {
            debug!(index, count = self.options.len(), "Ignoring out-of-range removal");
            return None;
        }

        let removed = self.options.remove(index);
        debug!(label = %removed, index, count = self.options.len(), "Option removed");
        Some(removed)
    }

    /// Returns the option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns all options in slice order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for OptionStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        for label in iter {
            store.add(label.as_ref());
        }
        store
    }
}
