//! Key bindings of the table editor, one group per mode.
//!
//! - **Browse**: `↑/k` `↓/j` row cursor, `space` select, `a` select all,
//!   `e` edit, `x` delete, `X` delete selected, `/` search, `r` reload,
//!   `q` quit. Page keys belong to the paginator bar.
//! - **Search**: typing edits the term, `enter` applies it, `esc` clears it.
//! - **Edit**: typing edits the active field, `tab` next field,
//!   `space/←/→` cycle the role, `enter` save, `esc` cancel.
//!
//! `ctrl+c` quits in every mode.

use crate::key::{Binding, KeyMap};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings of the table editor.
#[derive(Debug, Clone)]
pub struct EditorKeyMap {
    /// Move the row cursor up.
    pub cursor_up: Binding,
    /// Move the row cursor down.
    pub cursor_down: Binding,
    /// Toggle the checkbox of the row under the cursor.
    pub toggle_select: Binding,
    /// Toggle "select all" for the current page.
    pub select_all: Binding,
    /// Edit the row under the cursor.
    pub edit: Binding,
    /// Delete the row under the cursor.
    pub delete: Binding,
    /// Delete every selected row.
    pub delete_selected: Binding,
    /// Start typing a search term.
    pub search: Binding,
    /// Fetch the user list again.
    pub reload: Binding,
    /// Quit from browse mode.
    pub quit: Binding,
    /// Quit from any mode.
    pub force_quit: Binding,

    /// Apply the search term and return to browsing.
    pub accept_search: Binding,
    /// Clear the search term and return to browsing.
    pub clear_search: Binding,

    /// Move to the next field of the edited row.
    pub next_field: Binding,
    /// Cycle the role while the role field is active.
    pub cycle_role: Binding,
    /// Save the edited row.
    pub save: Binding,
    /// Discard the edited row's staged values.
    pub cancel: Binding,
}

impl Default for EditorKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle_select: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "select"),
            select_all: Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select page"),
            edit: Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            delete: Binding::new(vec![KeyCode::Char('x'), KeyCode::Delete])
                .with_help("x", "delete"),
            delete_selected: Binding::new(vec![KeyCode::Char('X')])
                .with_help("X", "delete selected"),
            search: Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            reload: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reload"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),

            accept_search: Binding::new(vec![KeyCode::Enter]).with_help("enter", "apply"),
            clear_search: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear"),

            next_field: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next field"),
            cycle_role: Binding::new(vec![KeyCode::Char(' '), KeyCode::Left, KeyCode::Right])
                .with_help("space/←/→", "role"),
            save: Binding::new(vec![KeyCode::Enter]).with_help("enter", "save"),
            cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
        }
    }
}

impl EditorKeyMap {
    /// Help for search mode.
    pub fn search_help(&self) -> Vec<&Binding> {
        vec![&self.accept_search, &self.clear_search, &self.force_quit]
    }

    /// Help for edit mode.
    pub fn edit_help(&self) -> Vec<&Binding> {
        vec![&self.next_field, &self.cycle_role, &self.save, &self.cancel]
    }
}

impl KeyMap for EditorKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.toggle_select,
            &self.select_all,
            &self.edit,
            &self.delete,
            &self.delete_selected,
            &self.search,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![
                &self.toggle_select,
                &self.select_all,
                &self.delete,
                &self.delete_selected,
            ],
            vec![&self.edit, &self.search, &self.reload],
            vec![&self.quit, &self.force_quit],
        ]
    }
}
