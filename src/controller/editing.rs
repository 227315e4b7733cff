//! Inline editing: enter edit mode, stage values, save or cancel.

use super::types::PendingEdit;
use super::Controller;
use crate::record::{Field, Role};

impl Controller {
    /// Puts a record into edit mode and opens its staging buffer. A buffer
    /// already staged for the record is kept.
    pub fn toggle_edit(&mut self, id: i64) {
        let Some(flags) = self.flags.get_mut(&id) else {
            tracing::debug!(id, "edit: no such user");
            return;
        };
        flags.editing = true;
        self.pending.entry(id).or_default();
    }

    /// Stages `value` for `field` of a record in edit mode. Nothing is written to
    /// the record until [`Controller::save`].
    pub fn update_field(&mut self, id: i64, field: Field, value: impl Into<String>) {
        if !self.is_editing(id) {
            tracing::debug!(id, %field, "update: user is not being edited");
            return;
        }
        self.pending.entry(id).or_default().set(field, value.into());
    }

    /// Commits the staged values of a record and leaves edit mode.
    ///
    /// Each field takes its staged value only when that value is non-empty; a
    /// staged role that names no role keeps the current one.
    pub fn save(&mut self, id: i64) {
        let Some(pos) = self.position_of(id) else {
            tracing::debug!(id, "save: no such user");
            return;
        };
        let staged = self.pending.remove(&id).unwrap_or_default();
        let PendingEdit { name, email, role } = staged;

        let record = &mut self.records[pos];
        if let Some(name) = name.filter(|v| !v.is_empty()) {
            record.name = name;
        }
        if let Some(email) = email.filter(|v| !v.is_empty()) {
            record.email = email;
        }
        if let Some(role) = role.filter(|v| !v.is_empty()) {
            match role.parse::<Role>() {
                Ok(role) => record.role = role,
                Err(err) => tracing::debug!(id, %err, "save: keeping role"),
            }
        }
        tracing::debug!(id, "saved user");

        if let Some(flags) = self.flags.get_mut(&id) {
            flags.editing = false;
        }
    }

    /// Leaves edit mode, discarding this record's staged values only.
    pub fn cancel(&mut self, id: i64) {
        let Some(flags) = self.flags.get_mut(&id) else {
            tracing::debug!(id, "cancel: no such user");
            return;
        };
        flags.editing = false;
        self.pending.remove(&id);
    }
}
