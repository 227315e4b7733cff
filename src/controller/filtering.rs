//! Substring search over the loaded users.

use super::Controller;

impl Controller {
    /// Applies a settled search term.
    ///
    /// An empty term shows every record. Otherwise a record stays when any of its
    /// text fields contains the term, ignoring case. A new term is a new list, so
    /// the view returns to page 1 and the selection is cleared just as a page
    /// change would.
    ///
    /// Keystroke coalescing happens before this call, in [`crate::debounce`].
    pub fn search(&mut self, term: &str) {
        tracing::debug!(term, "search");
        self.search_term = term.to_string();
        self.refresh(true);
        self.clear_selection();
    }

    pub(super) fn apply_filter(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| needle.is_empty() || record.matches(&needle))
            .map(|(index, _)| index)
            .collect();
    }
}
