#![warn(missing_docs)]

//! # usertable
//!
//! A terminal editor for a remote list of users, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The user list is fetched once from an HTTP endpoint and then browsed,
//! searched, paged, selected, deleted and edited locally. Nothing is written
//! back to the server.
//!
//! The crate is split into a pure core and the pieces that drive it:
//!
//! - [`paginator`]: the page window arithmetic and the paginator bar.
//! - [`controller`]: the table state machine (filtering, paging, selection,
//!   inline edits) over a list of [`record::Record`]s.
//! - [`debounce`]: single-slot debouncing of search keystrokes.
//! - [`fetch`]: loading the list from the endpoint.
//! - [`editor`]: the bubbletea program that renders the table and maps keys to
//!   controller transitions.
//! - [`config`], [`error`], [`key`], [`table`]: configuration, errors, key
//!   bindings and the grid renderer.
//!
//! ## Paging
//!
//! ```rust
//! use usertable::paginator::paginate;
//!
//! let window = paginate(205, 11, 10, 10);
//! assert_eq!(window.total_pages, 21);
//! assert_eq!((window.start_page_number, window.end_page_number), (6, 15));
//! assert_eq!((window.start_item_index, window.end_item_index), (100, 109));
//! ```
//!
//! ## Driving the controller
//!
//! ```rust
//! use usertable::prelude::*;
//!
//! let users = (1..=3)
//!     .map(|id| Record::new(id, format!("User {id}"), format!("u{id}@example.com"), Role::Member))
//!     .collect();
//!
//! let mut table = Controller::new();
//! table.load(users);
//!
//! table.toggle_edit(2);
//! table.update_field(2, Field::Role, "admin");
//! table.save(2);
//! assert_eq!(table.record(2).map(|r| r.role), Some(Role::Admin));
//!
//! table.toggle_select(1);
//! table.delete_selected();
//! assert_eq!(table.len(), 2);
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod key;
pub mod paginator;
pub mod record;
pub mod table;

pub use error::Error;

/// Convenience re-exports of the commonly used types.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::controller::{Controller, PendingEdit, Row, SelectionMode, UiFlags};
    pub use crate::debounce::{Model as Debounce, SettledMsg};
    pub use crate::editor::{EditorKeyMap, Mode as EditorMode, Model as Editor};
    pub use crate::error::Error;
    pub use crate::fetch::{fetch_records, load, parse_records, LoadedMsg};
    pub use crate::key::{help_line, Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::paginator::{paginate, Model as Paginator, PageSource, PageWindow};
    pub use crate::record::{Field, Record, Role};
    pub use crate::table::Model as Table;
}
