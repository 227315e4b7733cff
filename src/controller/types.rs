//! Value types held by the controller next to the records themselves.

use crate::record::{Field, Record};
use serde::Deserialize;

/// Transient UI state of one record, kept in a side-table keyed by id so the
/// fetched records are never mutated to carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiFlags {
    /// The row is in edit mode.
    pub editing: bool,
    /// The row's checkbox is ticked.
    pub selected: bool,
}

/// Staged, not yet saved, field values of one record in edit mode.
///
/// Each record in edit mode owns its own buffer, so editing several rows at once
/// never mixes their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdit {
    /// Staged name.
    pub name: Option<String>,
    /// Staged email.
    pub email: Option<String>,
    /// Staged role, as typed or picked.
    pub role: Option<String>,
}

impl PendingEdit {
    /// The staged value of `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    /// Stages `value` for `field`.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Role => &mut self.role,
        };
        *slot = Some(value);
    }

    /// True when nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

/// How "select all" decides which records belong to the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The rows at the current page's positions in the filtered list.
    #[default]
    Positional,
    /// Every record whose id satisfies `start < id <= end + 1` for the page's
    /// item-index bounds. Only lines up with the visible rows when ids are a
    /// dense 1-based sequence and no filter is active.
    IdRange,
}

/// One row of the current page.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// Position of the record in the filtered list.
    pub position: usize,
    /// The record.
    pub record: &'a Record,
    /// Its UI flags.
    pub flags: UiFlags,
    /// Its staged edit, while in edit mode.
    pub pending: Option<&'a PendingEdit>,
}

impl Row<'_> {
    /// The value to show for `field`: the staged value while editing, the
    /// saved one otherwise.
    pub fn display_value(&self, field: Field) -> String {
        if let Some(staged) = self.pending.and_then(|p| p.get(field)) {
            return staged.to_string();
        }
        match field {
            Field::Name => self.record.name.clone(),
            Field::Email => self.record.email.clone(),
            Field::Role => self.record.role.to_string(),
        }
    }
}
