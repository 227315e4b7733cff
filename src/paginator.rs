//! Page-window math and the paginator bar.
//!
//! [`paginate`] is a pure function: given the number of items, the current page,
//! the page size and how many page buttons fit in the bar, it returns a
//! [`PageWindow`] describing which page numbers to show and which item indices
//! belong to the current page. It never fails; an empty list simply produces an
//! empty window.
//!
//! [`Model`] wraps that function with the state a page bar needs: the current
//! window, navigation by [`PageSource`], disabled-button rules, key bindings and
//! rendering. It does not render any items; slicing the item list is left to the
//! caller through [`PageWindow::slice_bounds`].

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::ops::Range;

/// Items shown on one page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page buttons shown in the bar unless configured otherwise.
pub const DEFAULT_PAGES_PER_VIEW: usize = 10;

/// The derived pagination state for one `(total items, current page)` pair.
///
/// Page numbers are 1-based; item indices are 0-based positions in the list
/// being paginated. Windows are recomputed, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of pages needed for all items. Zero for an empty list.
    pub total_pages: usize,
    /// First page number shown in the bar.
    pub start_page_number: usize,
    /// Last page number shown in the bar.
    pub end_page_number: usize,
    /// Index of the first item on the current page.
    pub start_item_index: usize,
    /// Index of the last item on the current page. Only meaningful when
    /// `items` is non-empty.
    pub end_item_index: usize,
    /// The page this window was computed for.
    pub current_page: usize,
    /// Page numbers shown in the bar, `start_page_number..=end_page_number`.
    pub pages: Vec<usize>,
    /// Item indices on the current page, `start_item_index..=end_item_index`.
    pub items: Vec<usize>,
}

impl Default for PageWindow {
    fn default() -> Self {
        paginate(0, 1, DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGES_PER_VIEW)
    }
}

impl PageWindow {
    /// True when there is nothing to paginate.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Item indices of the current page as a half-open range.
    ///
    /// ```rust
    /// use usertable::paginator::paginate;
    ///
    /// let users: Vec<u32> = (1..=23).collect();
    /// let window = paginate(users.len(), 3, 10, 10);
    /// assert_eq!(&users[window.item_range()], &[21, 22, 23]);
    /// ```
    pub fn item_range(&self) -> Range<usize> {
        match (self.items.first(), self.items.last()) {
            (Some(&start), Some(&end)) => start..end + 1,
            _ => self.start_item_index..self.start_item_index,
        }
    }

    /// `(start, end)` slice bounds of the current page, end exclusive.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let range = self.item_range();
        (range.start, range.end)
    }

    /// Whether the given item index falls on the current page.
    pub fn contains_item(&self, index: usize) -> bool {
        self.item_range().contains(&index)
    }
}

/// Computes the page window for `total_items`.
///
/// When every page fits in the bar the window is `1..=total_pages`; otherwise it
/// is centred on `current_page` and pushed back inside `1..=total_pages` at both
/// ends. Zero page or window sizes are treated as 1, and a page number of 0 as 1.
/// A page past the end produces an empty item range.
///
/// ```rust
/// use usertable::paginator::paginate;
///
/// let window = paginate(205, 11, 10, 10);
/// assert_eq!(window.total_pages, 21);
/// assert_eq!((window.start_page_number, window.end_page_number), (6, 15));
/// assert_eq!((window.start_item_index, window.end_item_index), (100, 109));
/// ```
pub fn paginate(
    total_items: usize,
    current_page: usize,
    items_per_page: usize,
    pages_per_view: usize,
) -> PageWindow {
    let current_page = current_page.max(1);
    let items_per_page = items_per_page.max(1);
    let pages_per_view = pages_per_view.max(1);

    let total_pages = total_items.div_ceil(items_per_page);

    let (start_page_number, end_page_number) = if total_pages <= pages_per_view {
        (1, total_pages)
    } else {
        let mut start = current_page.saturating_sub(pages_per_view / 2).max(1);
        let mut end = start.saturating_add(pages_per_view - 1);
        if end > total_pages {
            end = total_pages;
            start = end + 1 - pages_per_view;
        }
        (start, end)
    };

    let start_item_index = (current_page - 1).saturating_mul(items_per_page);
    let (end_item_index, items) = if start_item_index < total_items {
        let end = start_item_index
            .saturating_add(items_per_page - 1)
            .min(total_items - 1);
        (end, (start_item_index..=end).collect())
    } else {
        (start_item_index, Vec::new())
    };

    PageWindow {
        total_pages,
        start_page_number,
        end_page_number,
        start_item_index,
        end_item_index,
        current_page,
        pages: (start_page_number..=end_page_number).collect(),
        items,
    }
}

/// Where a page change comes from: one of the bar's controls or a page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// The "first page" control.
    Start,
    /// The "previous page" control.
    Prev,
    /// The "next page" control.
    Next,
    /// The "last page" control.
    End,
    /// An explicit page button.
    Page(usize),
}

impl PageSource {
    /// Resolves the target page against `window`, clamped into the valid range.
    pub fn resolve(self, window: &PageWindow) -> usize {
        let target = match self {
            PageSource::Start => 1,
            PageSource::Prev => window.current_page.saturating_sub(1),
            PageSource::Next => window.current_page.saturating_add(1),
            PageSource::End => window.total_pages,
            PageSource::Page(n) => n,
        };
        target.clamp(1, window.total_pages.max(1))
    }
}

/// Key bindings of the paginator bar.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Jump to the first page.
    pub start: key::Binding,
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Jump to the last page.
    pub end: key::Binding,
    /// Jump to a page button by its place in the bar: `1` is the first button
    /// shown, `0` the tenth.
    pub page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l", "next page"),
            end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
            page: key::Binding::new(
                ('1'..='9')
                    .chain(std::iter::once('0'))
                    .map(KeyCode::Char)
                    .collect::<Vec<_>>(),
            )
            .with_help("1-9/0", "go to page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page, &self.page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.start,
            &self.prev_page,
            &self.next_page,
            &self.end,
            &self.page,
        ]]
    }
}

/// Styles of the paginator bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Enabled start/prev/next/end controls.
    pub control: Style,
    /// Disabled controls.
    pub disabled: Style,
    /// Page buttons other than the current one.
    pub page: Style,
    /// The current page button.
    pub current: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            control: Style::new().foreground(AdaptiveColor {
                Light: "#2196F3",
                Dark: "#64B5F6",
            }),
            disabled: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            page: Style::new().foreground(AdaptiveColor {
                Light: "#2196F3",
                Dark: "#64B5F6",
            }),
            current: Style::new()
                .background(Color::from("#2196F3"))
                .foreground(Color::from("#FFFFFF"))
                .bold(true),
        }
    }
}

/// The paginator bar: the current window plus navigation and rendering.
///
/// ```rust
/// use usertable::paginator::{Model, PageSource};
///
/// let mut bar = Model::new();
/// bar.set_total_items(23);
/// assert_eq!(bar.window().pages, vec![1, 2, 3]);
///
/// bar.go_to(PageSource::Next);
/// assert_eq!(bar.window().items, (10..=19).collect::<Vec<_>>());
///
/// bar.go_to(PageSource::End);
/// assert!(bar.next_disabled());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    items_per_page: usize,
    pages_per_view: usize,
    total_items: usize,
    window: PageWindow,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Rendering styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            pages_per_view: DEFAULT_PAGES_PER_VIEW,
            total_items: 0,
            window: PageWindow::default(),
            keymap: PaginatorKeyMap::default(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a bar with the default page and window sizes and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 are clamped to 1.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self.recompute(self.window.current_page);
        self
    }

    /// Sets how many page buttons the bar shows (builder pattern). Values below
    /// 1 are clamped to 1.
    pub fn with_pages_per_view(mut self, pages_per_view: usize) -> Self {
        self.pages_per_view = pages_per_view.max(1);
        self.recompute(self.window.current_page);
        self
    }

    /// Items per page.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Page buttons per view.
    pub fn pages_per_view(&self) -> usize {
        self.pages_per_view
    }

    /// The item count the current window was computed for.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// The current window.
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.window.current_page
    }

    /// Updates the item count, keeping the current page when it still exists and
    /// moving to the last page otherwise.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last = total_items.div_ceil(self.items_per_page).max(1);
        self.recompute(self.window.current_page.min(last));
    }

    /// Updates the item count and returns to the first page.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.recompute(1);
    }

    /// Navigates according to `source`. Returns whether the page changed.
    pub fn go_to(&mut self, source: PageSource) -> bool {
        let target = source.resolve(&self.window);
        let changed = target != self.window.current_page;
        self.recompute(target);
        changed
    }

    /// Whether the start and previous controls are disabled.
    pub fn prev_disabled(&self) -> bool {
        self.window.is_empty() || self.window.current_page == 1
    }

    /// Whether the next control is disabled.
    pub fn next_disabled(&self) -> bool {
        self.window.is_empty() || self.window.current_page == self.window.end_page_number
    }

    /// Whether the end control is disabled.
    pub fn end_disabled(&self) -> bool {
        self.window.is_empty() || self.window.current_page == self.window.total_pages
    }

    /// Maps a key message onto the page source it triggers, if any.
    pub fn page_source(&self, msg: &Msg) -> Option<PageSource> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.start.matches(key_msg) {
            Some(PageSource::Start)
        } else if self.keymap.prev_page.matches(key_msg) {
            Some(PageSource::Prev)
        } else if self.keymap.next_page.matches(key_msg) {
            Some(PageSource::Next)
        } else if self.keymap.end.matches(key_msg) {
            Some(PageSource::End)
        } else if self.keymap.page.matches(key_msg) {
            let KeyCode::Char(digit) = key_msg.key else {
                return None;
            };
            let slot = match digit.to_digit(10)? {
                0 => 9,
                n => n as usize - 1,
            };
            self.window.pages.get(slot).copied().map(PageSource::Page)
        } else {
            None
        }
    }

    /// Handles a message, navigating when it is one of the bar's keys.
    /// Returns the source that was applied.
    pub fn update(&mut self, msg: &Msg) -> Option<PageSource> {
        let source = self.page_source(msg)?;
        self.go_to(source);
        Some(source)
    }

    /// Renders the bar, e.g. `« ‹ 1 [2] 3 › »`. An empty window renders as an
    /// empty string.
    pub fn view(&self) -> String {
        if self.window.is_empty() {
            return String::new();
        }

        let control = |label: &str, disabled: bool| {
            if disabled {
                self.styles.disabled.clone().render(label)
            } else {
                self.styles.control.clone().render(label)
            }
        };

        let mut parts = Vec::with_capacity(self.window.pages.len() + 4);
        parts.push(control("«", self.prev_disabled()));
        parts.push(control("‹", self.prev_disabled()));
        for &page in &self.window.pages {
            if page == self.window.current_page {
                parts.push(self.styles.current.clone().render(&format!("[{page}]")));
            } else {
                parts.push(self.styles.page.clone().render(&page.to_string()));
            }
        }
        parts.push(control("›", self.next_disabled()));
        parts.push(control("»", self.end_disabled()));
        parts.join(" ")
    }

    fn recompute(&mut self, page: usize) {
        self.window = paginate(
            self.total_items,
            page,
            self.items_per_page,
            self.pages_per_view,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_empty_list() {
        let window = paginate(0, 1, 10, 10);
        assert_eq!(window.total_pages, 0);
        assert!(window.pages.is_empty());
        assert!(window.items.is_empty());
        assert!(window.is_empty());
        assert_eq!(window.item_range(), 0..0);
    }

    #[test]
    fn test_few_pages_show_all() {
        let window = paginate(25, 1, 10, 10);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert_eq!(window.start_item_index, 0);
        assert_eq!(window.end_item_index, 9);
        assert_eq!(window.items, (0..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_centres_on_current_page() {
        let window = paginate(205, 11, 10, 10);
        assert_eq!(window.total_pages, 21);
        assert_eq!(window.start_page_number, 6);
        assert_eq!(window.end_page_number, 15);
        assert_eq!(window.pages, (6..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_fit_skips_centring() {
        let window = paginate(100, 10, 10, 10);
        assert_eq!(window.total_pages, 10);
        assert_eq!(window.pages, (1..=10).collect::<Vec<_>>());
        assert_eq!(window.items, (90..=99).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_clamped_at_both_ends() {
        let head = paginate(205, 2, 10, 10);
        assert_eq!((head.start_page_number, head.end_page_number), (1, 10));

        let tail = paginate(205, 20, 10, 10);
        assert_eq!((tail.start_page_number, tail.end_page_number), (12, 21));
        assert_eq!(tail.pages.len(), 10);
    }

    #[test]
    fn test_last_page_is_partial() {
        let window = paginate(23, 3, 10, 10);
        assert_eq!(window.start_item_index, 20);
        assert_eq!(window.end_item_index, 22);
        assert_eq!(window.slice_bounds(), (20, 23));
    }

    #[test]
    fn test_item_bounds_stay_inside_list() {
        for total in 1usize..60 {
            for per_page in 1..12 {
                let pages = total.div_ceil(per_page);
                for page in 1..=pages {
                    for view in 1..8 {
                        let w = paginate(total, page, per_page, view);
                        assert!(w.start_item_index <= w.end_item_index);
                        assert!(w.end_item_index < total);
                        assert!(w.pages.contains(&page));
                        assert!(w.pages.len() <= view);
                    }
                }
            }
        }
    }

    #[test]
    fn test_huge_page_numbers_do_not_overflow() {
        let fits = paginate(10, usize::MAX, 10, 10);
        assert_eq!(fits.pages, vec![1]);
        assert!(fits.items.is_empty());

        let centred = paginate(205, usize::MAX / 2, 10, 10);
        assert_eq!((centred.start_page_number, centred.end_page_number), (12, 21));
        assert!(centred.items.is_empty());

        let max = paginate(205, usize::MAX, 1, 10);
        assert_eq!(max.end_page_number, 205);
        assert!(max.items.is_empty());
    }

    #[test]
    fn test_page_past_end_has_no_items() {
        let window = paginate(5, 4, 10, 10);
        assert!(window.items.is_empty());
        assert_eq!(window.item_range().len(), 0);
    }

    #[test]
    fn test_paginate_is_idempotent() {
        assert_eq!(paginate(77, 4, 7, 3), paginate(77, 4, 7, 3));
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let window = paginate(3, 0, 0, 0);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.pages, vec![1]);
        assert_eq!(window.items, vec![0]);
    }

    #[test]
    fn test_page_source_resolution() {
        let window = paginate(50, 3, 10, 10);
        assert_eq!(PageSource::Start.resolve(&window), 1);
        assert_eq!(PageSource::Prev.resolve(&window), 2);
        assert_eq!(PageSource::Next.resolve(&window), 4);
        assert_eq!(PageSource::End.resolve(&window), 5);
        assert_eq!(PageSource::Page(4).resolve(&window), 4);
        assert_eq!(PageSource::Page(40).resolve(&window), 5);

        let first = paginate(50, 1, 10, 10);
        assert_eq!(PageSource::Prev.resolve(&first), 1);
    }

    #[test]
    fn test_model_navigation_and_button_state() {
        let mut bar = Model::new();
        bar.set_total_items(23);
        assert!(bar.prev_disabled());
        assert!(!bar.next_disabled());

        assert!(bar.go_to(PageSource::Page(2)));
        assert_eq!(bar.window().items, (10..=19).collect::<Vec<_>>());

        assert!(bar.go_to(PageSource::End));
        assert_eq!(bar.current_page(), 3);
        assert!(bar.next_disabled());
        assert!(bar.end_disabled());
        assert!(!bar.go_to(PageSource::Next));
    }

    #[test]
    fn test_shrinking_list_clamps_page() {
        let mut bar = Model::new();
        bar.set_total_items(30);
        bar.go_to(PageSource::End);
        assert_eq!(bar.current_page(), 3);

        bar.set_total_items(20);
        assert_eq!(bar.current_page(), 2);
        assert_eq!(bar.window().items, (10..=19).collect::<Vec<_>>());

        bar.reset(20);
        assert_eq!(bar.current_page(), 1);
    }

    #[test]
    fn test_key_handling() {
        let mut bar = Model::new();
        bar.set_total_items(40);

        let next: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(bar.update(&next), Some(PageSource::Next));
        assert_eq!(bar.current_page(), 2);

        let end: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        });
        assert_eq!(bar.update(&end), Some(PageSource::End));
        assert_eq!(bar.current_page(), 4);

        let third: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('3'),
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(bar.update(&third), Some(PageSource::Page(3)));
        assert_eq!(bar.current_page(), 3);

        // Only four buttons are shown, so there is no ninth one.
        let ninth: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('9'),
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(bar.update(&ninth), None);
        assert_eq!(bar.current_page(), 3);

        let other: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('z'),
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(bar.update(&other), None);
    }

    #[test]
    fn test_view() {
        let mut bar = Model::new();
        assert_eq!(bar.view(), "");

        bar.set_total_items(23);
        bar.go_to(PageSource::Page(2));
        assert_eq!(plain(&bar.view()), "« ‹ 1 [2] 3 › »");
    }
}
