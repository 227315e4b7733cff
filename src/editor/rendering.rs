//! View composition for the table editor.

use super::{Mode, Model, BULLET};
use crate::controller::Controller;
use crate::key::{help_line, KeyMap};
use crate::record::Field;
use crate::table::{Column, Row};

/// Marks the active field of the row being edited.
const FIELD_CURSOR: &str = "▏";

pub(super) fn columns() -> Vec<Column> {
    vec![
        Column::new("", 3),
        Column::new("Name", 20),
        Column::new("Email", 28),
        Column::new("Role", 7),
        Column::new("Status", 7),
    ]
}

/// Builds the grid rows for the current page. `editing` is the row receiving
/// input, whose `field` gets a cursor mark.
pub(super) fn grid_rows(controller: &Controller, editing: Option<i64>, field: Field) -> Vec<Row> {
    controller
        .page_rows()
        .iter()
        .map(|row| {
            let checkbox = if row.flags.selected { "[x]" } else { "[ ]" };
            let mut cells = vec![checkbox.to_string()];
            for f in Field::ALL {
                let mut value = row.display_value(f);
                if editing == Some(row.record.id) && f == field {
                    value.push_str(FIELD_CURSOR);
                }
                cells.push(value);
            }
            let status = if row.flags.editing { "editing" } else { "" };
            cells.push(status.to_string());
            Row::new(cells).highlighted(row.flags.editing)
        })
        .collect()
}

impl Model {
    fn view_header(&self) -> String {
        let title = self.styles.title.clone().render(" Users ");
        let cursor = if self.mode == Mode::Search { FIELD_CURSOR } else { "" };
        let term = if self.search_input.is_empty() && self.mode != Mode::Search {
            self.styles.status.clone().render("(none, press / to search)")
        } else {
            self.styles.search_term.clone().render(&self.search_input)
        };
        format!(
            "{title}\n{}{term}{cursor}",
            self.styles.search_prompt.clone().render("Search: ")
        )
    }

    fn view_body(&self) -> String {
        if self.loading && !self.controller.is_loaded() {
            return self.styles.no_items.clone().render("Loading users…");
        }
        if self.controller.is_empty() {
            return self.styles.no_items.clone().render("No users.");
        }
        let mut body = self.grid.view();
        let bar = self.controller.paginator().view();
        if !bar.is_empty() {
            body.push('\n');
            body.push_str(&bar);
        }
        body
    }

    fn view_status(&self) -> String {
        let mut parts = vec![
            format!("{} users", self.controller.len()),
            format!("{} selected", self.controller.selected_ids().len()),
        ];
        if self.mode == Mode::Edit {
            parts.push(format!("editing {}", self.field));
        }
        if self.loading && self.controller.is_loaded() {
            parts.push("reloading…".to_string());
        }
        self.styles
            .status
            .clone()
            .render(&parts.join(&format!(" {BULLET} ")))
    }

    fn view_help(&self) -> String {
        let mut bindings = match self.mode {
            Mode::Browse => self.keymap.short_help(),
            Mode::Search => self.keymap.search_help(),
            Mode::Edit => self.keymap.edit_help(),
        };
        if self.mode == Mode::Browse {
            bindings.extend(self.controller.paginator().keymap.short_help());
        }
        self.styles.help.clone().render(&help_line(&bindings))
    }

    /// Renders the whole editor.
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_header(), self.view_body(), self.view_status()];
        if let Some(err) = self.controller.error() {
            sections.push(
                self.styles
                    .error
                    .clone()
                    .render(&format!("Error: {err} (press r to retry)")),
            );
        }
        sections.push(self.view_help());
        sections.join("\n")
    }
}
