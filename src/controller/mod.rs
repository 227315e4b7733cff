//! The table's state machine: loaded users, search filter, page window,
//! checkbox selection and inline edits.
//!
//! ## State
//!
//! - **Authoritative list**: the users as last loaded, minus local deletions.
//! - **Filtered list**: positions into the authoritative list whose record
//!   matches the search term; always an order-preserving subsequence.
//! - **Page window**: computed by [`crate::paginator`] over the filtered list.
//! - **UI flags**: `editing`/`selected` per record id, in a side-table.
//! - **Pending edits**: one staging buffer per record in edit mode.
//!
//! ## Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | `load` / `load_failed` | replace the list, back to page 1 |
//! | `search` | re-filter, back to page 1, clear selection |
//! | `page_change` | move the window, clear selection |
//! | `toggle_edit` / `update_field` / `save` / `cancel` | inline editing |
//! | `toggle_select` / `select_all` | checkboxes |
//! | `delete` / `delete_selected` | remove records, keep the page if it still exists |
//!
//! Every per-record transition ignores ids it does not know. Transitions run to
//! completion and never fail.

mod editing;
mod filtering;
mod model;
mod selection;
mod types;

#[cfg(test)]
mod tests;

pub use model::Controller;
pub use types::{PendingEdit, Row, SelectionMode, UiFlags};
