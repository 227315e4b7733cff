//! Styles of the table editor's chrome: title, search line, status, errors
//! and help. The grid and the paginator bar carry their own styles.

use lipgloss_extras::prelude::*;

/// Separates help entries and status fields.
pub const BULLET: &str = "•";

/// Styles of the editor's non-grid lines.
#[derive(Debug, Clone)]
pub struct EditorStyles {
    /// The title.
    pub title: Style,
    /// The `Search:` prompt.
    pub search_prompt: Style,
    /// The search term.
    pub search_term: Style,
    /// The status line.
    pub status: Style,
    /// The empty-list message.
    pub no_items: Style,
    /// The load error line.
    pub error: Style,
    /// The help line.
    pub help: Style,
}

impl Default for EditorStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_term: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error: Style::new().foreground(Color::from("#FF5F87")).bold(true),
            help: Style::new().foreground(subdued_color),
        }
    }
}
