//! Paging, checkbox selection and deletion.

use super::types::SelectionMode;
use super::Controller;
use crate::paginator::PageSource;

impl Controller {
    /// Moves to another page. Selection never survives a page change, so every
    /// checkbox, including "select all", is cleared. Returns whether the page
    /// number changed.
    pub fn page_change(&mut self, source: PageSource) -> bool {
        let changed = self.paginator.go_to(source);
        tracing::debug!(?source, page = self.paginator.current_page(), "page change");
        self.clear_selection();
        changed
    }

    /// Flips a record's checkbox and unticks "select all".
    pub fn toggle_select(&mut self, id: i64) {
        let Some(flags) = self.flags.get_mut(&id) else {
            tracing::debug!(id, "select: no such user");
            return;
        };
        flags.selected = !flags.selected;
        self.all_selected = false;
    }

    /// Ticks or unticks "select all" and applies it to the current page.
    pub fn select_all(&mut self, checked: bool) {
        self.all_selected = checked;
        let ids: Vec<i64> = match self.selection_mode {
            SelectionMode::Positional => self.page_rows().iter().map(|row| row.record.id).collect(),
            SelectionMode::IdRange => {
                let window = self.window();
                if window.items.is_empty() {
                    Vec::new()
                } else {
                    let start = window.start_item_index as i64;
                    let end = window.end_item_index as i64;
                    self.records
                        .iter()
                        .map(|r| r.id)
                        .filter(|&id| start < id && id <= end + 1)
                        .collect()
                }
            }
        };
        for id in ids {
            if let Some(flags) = self.flags.get_mut(&id) {
                flags.selected = checked;
            }
        }
    }

    /// Removes a record. The page is kept when it still exists, otherwise the
    /// view moves to the new last page.
    pub fn delete(&mut self, id: i64) {
        let Some(pos) = self.position_of(id) else {
            tracing::debug!(id, "delete: no such user");
            return;
        };
        self.records.remove(pos);
        self.flags.remove(&id);
        self.pending.remove(&id);
        tracing::debug!(id, "deleted user");
        self.refresh(false);
    }

    /// Removes every selected record and unticks "select all". Does nothing
    /// when no record is selected.
    pub fn delete_selected(&mut self) {
        let selected = self.selected_ids();
        if selected.is_empty() {
            return;
        }
        self.records.retain(|r| !selected.contains(&r.id));
        for id in &selected {
            self.flags.remove(id);
            self.pending.remove(id);
        }
        self.all_selected = false;
        tracing::debug!(count = selected.len(), "deleted selected users");
        self.refresh(false);
    }

    pub(super) fn clear_selection(&mut self) {
        for flags in self.flags.values_mut() {
            flags.selected = false;
        }
        self.all_selected = false;
    }
}
