//! The controller struct, loading, and read access to its state.

use super::types::{PendingEdit, Row, SelectionMode, UiFlags};
use crate::error::Error;
use crate::paginator::{self, PageWindow};
use crate::record::Record;
use std::collections::HashMap;

/// Owns the loaded users and keeps filtering, paging, selection and editing
/// consistent with each other.
///
/// The authoritative list is what was last loaded minus local deletions. The
/// filtered list is derived from it by the search term and stored as positions
/// into the authoritative list, so it is always an order-preserving
/// subsequence. The page window always describes the filtered list.
///
/// ```rust
/// use usertable::controller::Controller;
/// use usertable::paginator::PageSource;
/// use usertable::record::{Record, Role};
///
/// let users = (1..=23)
///     .map(|id| Record::new(id, format!("User {id}"), format!("u{id}@example.com"), Role::Member))
///     .collect();
///
/// let mut table = Controller::new();
/// table.load(users);
/// table.page_change(PageSource::Page(2));
/// assert_eq!(table.window().items, (10..=19).collect::<Vec<_>>());
///
/// table.search("user 2");
/// assert_eq!(table.len(), 5); // 2, 20, 21, 22, 23
/// ```
#[derive(Debug)]
pub struct Controller {
    pub(super) records: Vec<Record>,
    pub(super) flags: HashMap<i64, UiFlags>,
    pub(super) pending: HashMap<i64, PendingEdit>,

    // Filter
    pub(super) search_term: String,
    pub(super) filtered: Vec<usize>,

    // Pagination and selection
    pub(super) paginator: paginator::Model,
    pub(super) all_selected: bool,
    pub(super) selection_mode: SelectionMode,

    pub(super) load_error: Option<Error>,
    pub(super) loaded: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            flags: HashMap::new(),
            pending: HashMap::new(),
            search_term: String::new(),
            filtered: Vec::new(),
            paginator: paginator::Model::new(),
            all_selected: false,
            selection_mode: SelectionMode::default(),
            load_error: None,
            loaded: false,
        }
    }
}

impl Controller {
    /// Creates an empty controller with 10 rows per page and 10 page buttons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern).
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.paginator = self.paginator.with_items_per_page(items_per_page);
        self
    }

    /// Sets the number of page buttons (builder pattern).
    pub fn with_pages_per_view(mut self, pages_per_view: usize) -> Self {
        self.paginator = self.paginator.with_pages_per_view(pages_per_view);
        self
    }

    /// Sets how "select all" picks the page's records (builder pattern).
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Replaces the users with freshly fetched ones.
    ///
    /// Flags start cleared, staged edits are dropped, the active search term is
    /// re-applied and the view returns to page 1.
    pub fn load(&mut self, records: Vec<Record>) {
        tracing::info!(count = records.len(), "loaded users");
        self.flags = records
            .iter()
            .map(|r| (r.id, UiFlags::default()))
            .collect();
        self.records = records;
        self.pending.clear();
        self.all_selected = false;
        self.load_error = None;
        self.loaded = true;
        self.refresh(true);
    }

    /// Records a failed fetch: the list is left empty and the error is kept
    /// for display until the next successful load.
    pub fn load_failed(&mut self, error: Error) {
        tracing::warn!(%error, "failed to load users");
        self.records.clear();
        self.flags.clear();
        self.pending.clear();
        self.all_selected = false;
        self.load_error = Some(error);
        self.loaded = true;
        self.refresh(true);
    }

    /// The error of the last load, if it failed.
    pub fn error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    /// Whether a load (successful or not) has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The authoritative list.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks a record up by id.
    pub fn record(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The filtered list, in order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().map(move |&i| &self.records[i])
    }

    /// Number of records in the filtered list.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the filtered list is empty.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current page window.
    pub fn window(&self) -> &PageWindow {
        self.paginator.window()
    }

    /// The paginator bar, for rendering and key lookup.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// How "select all" picks records.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The rows of the current page, at most one page long.
    pub fn page_rows(&self) -> Vec<Row<'_>> {
        self.window()
            .item_range()
            .filter_map(|position| {
                let record = &self.records[*self.filtered.get(position)?];
                Some(Row {
                    position,
                    record,
                    flags: self.flags(record.id),
                    pending: self.pending.get(&record.id),
                })
            })
            .collect()
    }

    /// UI flags of a record; cleared flags for unknown ids.
    pub fn flags(&self, id: i64) -> UiFlags {
        self.flags.get(&id).copied().unwrap_or_default()
    }

    /// Whether the record is in edit mode.
    pub fn is_editing(&self, id: i64) -> bool {
        self.flags(id).editing
    }

    /// Whether the record is selected.
    pub fn is_selected(&self, id: i64) -> bool {
        self.flags(id).selected
    }

    /// The staged edit of a record in edit mode.
    pub fn pending(&self, id: i64) -> Option<&PendingEdit> {
        self.pending.get(&id)
    }

    /// Ids of all selected records, in list order.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.records
            .iter()
            .filter(|r| self.is_selected(r.id))
            .map(|r| r.id)
            .collect()
    }

    /// Whether the "select all" checkbox is ticked.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub(super) fn position_of(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Re-derives the filtered list and the page window after a structural
    /// change. `reset_page` returns to page 1; otherwise the current page is
    /// kept, clamped to the new last page.
    pub(super) fn refresh(&mut self, reset_page: bool) {
        self.apply_filter();
        if reset_page {
            self.paginator.reset(self.filtered.len());
        } else {
            self.paginator.set_total_items(self.filtered.len());
        }
    }
}
