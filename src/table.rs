//! A fixed-width grid with a row cursor.
//!
//! The grid holds only the rows handed to it (the editor gives it the current
//! page, never the whole list). Cells are padded or truncated to their column's
//! display width, measured with `unicode-width`, so wide characters do not
//! break the alignment.
//!
//! ```rust
//! use usertable::table::{Column, Model, Row};
//!
//! let mut grid = Model::new(vec![Column::new("Name", 6), Column::new("Role", 6)]);
//! grid.set_rows(vec![
//!     Row::new(vec!["Aaron".into(), "Member".into()]),
//!     Row::new(vec!["Aishwarya".into(), "Admin".into()]),
//! ]);
//! grid.select_next();
//! assert_eq!(grid.cursor(), 1);
//! assert!(strip(&grid.view()).contains("Aishw…"));
//! # fn strip(s: &str) -> String {
//! #     String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
//! # }
//! ```

use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marks a truncated cell.
pub const ELLIPSIS: &str = "…";

const GAP: &str = "  ";

/// A column: header title and display width in cells.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Width in terminal cells.
    pub width: usize,
}

impl Column {
    /// Creates a column.
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// One grid row. `highlight` renders the row in the emphasis style regardless
/// of the cursor (used for rows being edited).
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Cell texts, one per column. Missing cells render blank.
    pub cells: Vec<String>,
    /// Render in the highlight style.
    pub highlight: bool,
}

impl Row {
    /// Creates a plain row.
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            highlight: false,
        }
    }

    /// Sets the highlight flag (builder pattern).
    pub fn highlighted(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Styles for the grid.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header row.
    pub header: Style,
    /// Ordinary rows.
    pub cell: Style,
    /// The row under the cursor.
    pub cursor: Style,
    /// Highlighted rows.
    pub highlight: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                }),
            cell: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            highlight: Style::new().foreground(AdaptiveColor {
                Light: "#F793FF",
                Dark: "#AD58B4",
            }),
        }
    }
}

/// The grid state.
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    rows: Vec<Row>,
    cursor: usize,
    /// Rendering styles.
    pub styles: Styles,
}

impl Model {
    /// Creates an empty grid.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            cursor: 0,
            styles: Styles::default(),
        }
    }

    /// The columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replaces the rows, keeping the cursor on the same index when it still
    /// exists and on the last row otherwise.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the rows.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.rows.len().saturating_sub(1));
    }

    /// The row under the cursor.
    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    /// Moves the cursor down, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor up, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Renders the header and the rows.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let header: Vec<String> = self.columns.iter().map(|c| fit(&c.title, c.width)).collect();
        lines.push(format!("  {}", self.styles.header.clone().render(&header.join(GAP))));

        for (index, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| fit(row.cells.get(i).map(String::as_str).unwrap_or(""), column.width))
                .collect();
            let line = cells.join(GAP);

            if index == self.cursor {
                lines.push(self.styles.cursor.clone().render(&format!("> {line}")));
            } else if row.highlight {
                lines.push(format!("  {}", self.styles.highlight.clone().render(&line)));
            } else {
                lines.push(format!("  {}", self.styles.cell.clone().render(&line)));
            }
        }

        lines.join("\n")
    }
}

/// Pads or truncates `text` to exactly `width` display cells.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    used += ELLIPSIS.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
