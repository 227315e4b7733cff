//! The interactive table editor.
//!
//! A bubbletea program hosting the [`Controller`], its paginator bar, a search
//! debouncer and a grid for the current page. It translates key presses into
//! controller transitions and renders the result:
//!
//! ```text
//!  Users
//! Search: adm
//!   [ ]  Name            Email                     Role    Status
//! > [x]  Aishwarya Naik  aishwarya@mailinator.com  Admin
//!   [ ]  Arvind Kumar    arvind@mailinator.com     Admin   editing
//! « ‹ [1] 2 › »
//! 12 users • 1 selected
//! space select • a select page • e edit • x delete • ...
//! ```
//!
//! ## Modes
//!
//! - **Browse**: move the row cursor, page, select, delete, start editing or
//!   searching.
//! - **Search**: typing edits the search term; the term is applied once typing
//!   pauses for the configured debounce delay, or at once on `enter`.
//! - **Edit**: typing stages a value for the active field of the row under the
//!   cursor; nothing changes until `enter` saves.
//!
//! ## Loading
//!
//! [`Model::init`](bubbletea_rs::Model::init) fetches the user list from the
//! configured endpoint. A failed fetch leaves the table empty and shows the
//! error until `r` fetches again.

mod keys;
mod rendering;
mod style;


pub use keys::EditorKeyMap;
pub use style::{EditorStyles, BULLET};

use crate::config::Config;
use crate::controller::Controller;
use crate::debounce;
use crate::fetch::{self, LoadedMsg};
use crate::record::{Field, Role};
use crate::table;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// What key presses currently do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the table.
    #[default]
    Browse,
    /// Typing a search term.
    Search,
    /// Editing a row.
    Edit,
}

/// The table editor.
#[derive(Debug)]
pub struct Model {
    controller: Controller,
    grid: table::Model,
    search: debounce::Model,
    search_input: String,

    mode: Mode,
    editing: Option<i64>,
    field: Field,

    endpoint: String,
    loading: bool,

    /// Key bindings.
    pub keymap: EditorKeyMap,
    /// Rendering styles.
    pub styles: EditorStyles,
}

impl Model {
    /// Creates an editor from configuration, with no users loaded.
    pub fn new(config: &Config) -> Self {
        let controller = Controller::new()
            .with_items_per_page(config.table.items_per_page)
            .with_pages_per_view(config.table.pages_per_view)
            .with_selection_mode(config.table.selection);

        let mut model = Self {
            controller,
            grid: table::Model::new(rendering::columns()),
            search: debounce::new(config.search.debounce),
            search_input: String::new(),
            mode: Mode::Browse,
            editing: None,
            field: Field::Name,
            endpoint: config.endpoint.clone(),
            loading: false,
            keymap: EditorKeyMap::default(),
            styles: EditorStyles::default(),
        };
        model.sync_grid();
        model
    }

    /// The table state.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The search term as typed, which may not have been applied yet.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The field receiving input in edit mode.
    pub fn active_field(&self) -> Field {
        self.field
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Index of the row cursor within the current page.
    pub fn cursor(&self) -> usize {
        self.grid.cursor()
    }

    /// Id of the record under the row cursor.
    pub fn current_id(&self) -> Option<i64> {
        self.controller
            .page_rows()
            .get(self.grid.cursor())
            .map(|row| row.record.id)
    }

    /// Starts fetching the user list.
    pub fn reload(&mut self) -> Cmd {
        tracing::debug!(endpoint = %self.endpoint, "reloading users");
        self.loading = true;
        fetch::load(self.endpoint.clone())
    }

    /// Handles one message and returns the command to run next, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<LoadedMsg>() {
            Ok(loaded) => {
                self.on_loaded(*loaded);
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(term) = self.search.update(&msg) {
            self.apply_search(&term);
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        match self.mode {
            Mode::Browse => self.update_browse(&msg, key_msg),
            Mode::Search => self.update_search(key_msg),
            Mode::Edit => {
                self.update_edit(key_msg);
                None
            }
        }
    }

    fn on_loaded(&mut self, LoadedMsg(result): LoadedMsg) {
        self.loading = false;
        self.editing = None;
        if self.mode == Mode::Edit {
            self.mode = Mode::Browse;
        }
        match result {
            Ok(records) => self.controller.load(records),
            Err(err) => self.controller.load_failed(err),
        }
        self.grid.set_cursor(0);
        self.sync_grid();
    }

    fn update_browse(&mut self, msg: &Msg, key_msg: &KeyMsg) -> Option<Cmd> {
        let keymap = &self.keymap;

        if keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        } else if keymap.cursor_up.matches(key_msg) {
            self.grid.select_prev();
        } else if keymap.cursor_down.matches(key_msg) {
            self.grid.select_next();
        } else if keymap.toggle_select.matches(key_msg) {
            if let Some(id) = self.current_id() {
                self.controller.toggle_select(id);
            }
        } else if keymap.select_all.matches(key_msg) {
            let checked = !self.controller.all_selected();
            self.controller.select_all(checked);
        } else if keymap.edit.matches(key_msg) {
            if let Some(id) = self.current_id() {
                self.controller.toggle_edit(id);
                self.editing = Some(id);
                self.field = Field::Name;
                self.mode = Mode::Edit;
            }
        } else if keymap.delete.matches(key_msg) {
            if let Some(id) = self.current_id() {
                self.controller.delete(id);
            }
        } else if keymap.delete_selected.matches(key_msg) {
            self.controller.delete_selected();
        } else if keymap.search.matches(key_msg) {
            self.mode = Mode::Search;
        } else if keymap.reload.matches(key_msg) {
            return Some(self.reload());
        } else if let Some(source) = self.controller.paginator().page_source(msg) {
            if self.controller.page_change(source) {
                self.grid.set_cursor(0);
            }
        } else {
            return None;
        }

        self.sync_grid();
        None
    }

    fn update_search(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.accept_search.matches(key_msg) {
            self.search.cancel();
            let term = self.search_input.clone();
            self.apply_search(&term);
            self.mode = Mode::Browse;
            return None;
        }
        if self.keymap.clear_search.matches(key_msg) {
            self.search.cancel();
            self.search_input.clear();
            self.apply_search("");
            self.mode = Mode::Browse;
            return None;
        }

        match key_msg.key {
            KeyCode::Char(c) if is_typed(key_msg) => self.search_input.push(c),
            KeyCode::Backspace => {
                self.search_input.pop()?;
            }
            _ => return None,
        }
        Some(self.search.trigger(self.search_input.clone()))
    }

    fn update_edit(&mut self, key_msg: &KeyMsg) {
        let Some(id) = self.editing else {
            self.mode = Mode::Browse;
            return;
        };

        if self.keymap.save.matches(key_msg) {
            self.controller.save(id);
            self.finish_edit();
        } else if self.keymap.cancel.matches(key_msg) {
            self.controller.cancel(id);
            self.finish_edit();
        } else if self.keymap.next_field.matches(key_msg) {
            self.field = self.field.next();
        } else if self.field == Field::Role {
            if self.keymap.cycle_role.matches(key_msg) {
                let role = self.staged_value(id).parse::<Role>().unwrap_or_default();
                self.controller.update_field(id, Field::Role, role.toggled().as_str());
            }
        } else {
            let mut value = self.staged_value(id);
            match key_msg.key {
                KeyCode::Char(c) if is_typed(key_msg) => value.push(c),
                KeyCode::Backspace => {
                    value.pop();
                }
                _ => return,
            }
            self.controller.update_field(id, self.field, value);
        }
        self.sync_grid();
    }

    fn finish_edit(&mut self) {
        self.editing = None;
        self.field = Field::Name;
        self.mode = Mode::Browse;
    }

    /// The active field's value as currently shown: staged if anything was
    /// staged, saved otherwise.
    fn staged_value(&self, id: i64) -> String {
        if let Some(staged) = self
            .controller
            .pending(id)
            .and_then(|pending| pending.get(self.field))
        {
            return staged.to_string();
        }
        match (self.controller.record(id), self.field) {
            (Some(record), Field::Name) => record.name.clone(),
            (Some(record), Field::Email) => record.email.clone(),
            (Some(record), Field::Role) => record.role.as_str().to_string(),
            (None, _) => String::new(),
        }
    }

    fn apply_search(&mut self, term: &str) {
        self.controller.search(term);
        self.grid.set_cursor(0);
        self.sync_grid();
    }

    fn sync_grid(&mut self) {
        let rows = rendering::grid_rows(&self.controller, self.editing, self.field);
        self.grid.set_rows(rows);
    }
}

/// Whether a character key is text input rather than a shortcut.
fn is_typed(key_msg: &KeyMsg) -> bool {
    !key_msg
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new(&Config::current());
        let cmd = model.reload();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
