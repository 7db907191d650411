//! Selection and scroll state for the page browser
//!
//! Tracks which page the menu points at, how far the content pane is
//! scrolled, whether expanders are open and whether the sidebar is shown.
//! Key presses are mapped to [`KeyAction`]s here so the bindings can be
//! checked without a terminal.

use crate::output::LayoutItem;
use comment_docs_core::Page;
use iocraft::prelude::{KeyCode, KeyModifiers};
use std::ops::Range;

/// What a key press asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    PreviousPage,
    NextPage,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleExpanders,
    ToggleSidebar,
}

/// Key binding table; `None` for keys the browser ignores
pub fn key_action(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PreviousPage,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::NextPage,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Top,
        KeyCode::End => KeyAction::Bottom,
        KeyCode::Char('e') => KeyAction::ToggleExpanders,
        KeyCode::Char('s') => KeyAction::ToggleSidebar,
        _ => return None,
    };
    Some(action)
}

/// Current state of the selection control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Menu entries in registration order
    pages: Vec<Page>,
    /// Index of the selected entry
    selected: usize,
    /// First visible layout item
    pub scroll: usize,
    /// Show expander bodies
    pub expand_all: bool,
    /// Show the page menu
    pub sidebar_visible: bool,
}

impl SelectionState {
    /// Create a new selection starting on `initial`
    ///
    /// Falls back to the first entry when `initial` is not in the menu.
    pub fn new(pages: Vec<Page>, initial: Page) -> Self {
        let selected = pages.iter().position(|p| *p == initial).unwrap_or(0);
        Self {
            pages,
            selected,
            scroll: 0,
            expand_all: false,
            sidebar_visible: true,
        }
    }

    pub fn with_sidebar(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }

    /// Currently selected page, `None` for an empty menu
    pub fn current(&self) -> Option<Page> {
        self.pages.get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move to the next entry; returns true when the selection changed
    pub fn select_next(&mut self) -> bool {
        if self.selected + 1 >= self.pages.len() {
            return false;
        }
        self.set_selected(self.selected + 1);
        true
    }

    /// Move to the previous entry; returns true when the selection changed
    pub fn select_previous(&mut self) -> bool {
        if self.selected == 0 || self.pages.is_empty() {
            return false;
        }
        self.set_selected(self.selected - 1);
        true
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index;
        self.scroll = 0;
    }

    /// Scroll by `delta` items, clamped to `[0, max]`
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        let next = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll = next.min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self, max: usize) {
        self.scroll = max;
    }

    /// Open or close every expander
    pub fn toggle_expanders(&mut self) {
        self.expand_all = !self.expand_all;
        self.scroll = 0;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Apply a key action against a viewport of `page_rows` rows whose
    /// largest offset is `max_scroll`
    ///
    /// Returns true when the selected page changed. `Quit` is left to the
    /// caller.
    pub fn apply(&mut self, action: KeyAction, max_scroll: usize, page_rows: usize) -> bool {
        let rows = isize::try_from(page_rows).unwrap_or(isize::MAX);
        match action {
            KeyAction::PreviousPage => return self.select_previous(),
            KeyAction::NextPage => return self.select_next(),
            KeyAction::PageUp => self.scroll_by(-rows, max_scroll),
            KeyAction::PageDown => self.scroll_by(rows, max_scroll),
            KeyAction::Top => self.scroll_to_top(),
            KeyAction::Bottom => self.scroll_to_bottom(max_scroll),
            KeyAction::ToggleExpanders => self.toggle_expanders(),
            KeyAction::ToggleSidebar => self.toggle_sidebar(),
            KeyAction::Quit => {}
        }
        false
    }
}

/// Largest scroll offset that still fills the viewport
pub fn max_offset(items: &[LayoutItem], height: usize) -> usize {
    let mut used = 0;
    let mut first = items.len();
    for (index, item) in items.iter().enumerate().rev() {
        if used + item.rows() > height && first < items.len() {
            break;
        }
        used += item.rows();
        first = index;
    }
    first.min(items.len().saturating_sub(1))
}

/// Items visible from `offset` in a viewport of `height` rows
///
/// Always includes at least one item when `offset` is in range, even if it
/// is taller than the viewport.
pub fn visible_range(items: &[LayoutItem], offset: usize, height: usize) -> Range<usize> {
    let start = offset.min(items.len());
    let mut end = start;
    let mut used = 0;
    while end < items.len() {
        let rows = items[end].rows();
        if used + rows > height && end > start {
            break;
        }
        used += rows;
        end += 1;
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{layout, LayoutOptions};
    use comment_docs_core::{AnimationData, Document};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn menu() -> Vec<Page> {
        Page::ALL.to_vec()
    }

    #[test]
    fn test_initial_selection() {
        let state = SelectionState::new(menu(), Page::Backend);
        assert_eq!(state.current(), Some(Page::Backend));
        assert_eq!(state.selected_index(), 2);

        let state = SelectionState::new(vec![Page::Frontend], Page::Home);
        assert_eq!(state.current(), Some(Page::Frontend));

        let state = SelectionState::new(Vec::new(), Page::Home);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut state = SelectionState::new(menu(), Page::Home);
        assert!(!state.select_previous());

        assert!(state.select_next());
        assert!(state.select_next());
        assert!(state.select_next());
        assert_eq!(state.current(), Some(Page::MachineLearning));
        assert!(!state.select_next());

        assert!(state.select_previous());
        assert_eq!(state.current(), Some(Page::Backend));
    }

    #[test]
    fn test_changing_page_resets_scroll() {
        let mut state = SelectionState::new(menu(), Page::Home);
        state.scroll_by(5, 10);
        assert_eq!(state.scroll, 5);

        assert!(!state.select_previous());
        assert_eq!(state.scroll, 5);

        assert!(state.select_next());
        assert_eq!(state.current(), Some(Page::Frontend));
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = SelectionState::new(menu(), Page::Home);
        state.scroll_by(-3, 10);
        assert_eq!(state.scroll, 0);
        state.scroll_by(25, 10);
        assert_eq!(state.scroll, 10);
        state.scroll_to_top();
        assert_eq!(state.scroll, 0);
        state.scroll_to_bottom(7);
        assert_eq!(state.scroll, 7);
    }

    #[test]
    fn test_toggle_expanders() {
        let mut state = SelectionState::new(menu(), Page::Home);
        state.scroll_by(4, 10);
        state.toggle_expanders();
        assert!(state.expand_all);
        assert_eq!(state.scroll, 0);
        state.toggle_expanders();
        assert!(!state.expand_all);
    }

    #[test]
    fn test_key_bindings() {
        let none = KeyModifiers::NONE;
        let cases = [
            (KeyCode::Char('q'), none, Some(KeyAction::Quit)),
            (KeyCode::Esc, none, Some(KeyAction::Quit)),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Some(KeyAction::Quit)),
            (KeyCode::Up, none, Some(KeyAction::PreviousPage)),
            (KeyCode::Char('k'), none, Some(KeyAction::PreviousPage)),
            (KeyCode::Down, none, Some(KeyAction::NextPage)),
            (KeyCode::Char('j'), none, Some(KeyAction::NextPage)),
            (KeyCode::PageUp, none, Some(KeyAction::PageUp)),
            (KeyCode::PageDown, none, Some(KeyAction::PageDown)),
            (KeyCode::Char(' '), none, Some(KeyAction::PageDown)),
            (KeyCode::Home, none, Some(KeyAction::Top)),
            (KeyCode::End, none, Some(KeyAction::Bottom)),
            (KeyCode::Char('e'), none, Some(KeyAction::ToggleExpanders)),
            (KeyCode::Char('s'), none, Some(KeyAction::ToggleSidebar)),
            (KeyCode::Char('c'), none, None),
            (KeyCode::Char('x'), none, None),
            (KeyCode::Enter, none, None),
        ];
        for (code, modifiers, expected) in cases {
            assert_eq!(key_action(code, modifiers), expected, "{:?} {:?}", code, modifiers);
        }
    }

    #[test]
    fn test_apply_actions() {
        let mut state = SelectionState::new(menu(), Page::Home);

        assert!(!state.apply(KeyAction::PreviousPage, 10, 4));
        assert!(state.apply(KeyAction::NextPage, 10, 4));
        assert_eq!(state.current(), Some(Page::Frontend));

        assert!(!state.apply(KeyAction::PageDown, 10, 4));
        assert!(!state.apply(KeyAction::PageDown, 10, 4));
        assert_eq!(state.scroll, 8);
        state.apply(KeyAction::PageDown, 10, 4);
        assert_eq!(state.scroll, 10);
        state.apply(KeyAction::PageUp, 10, 4);
        assert_eq!(state.scroll, 6);
        state.apply(KeyAction::Top, 10, 4);
        assert_eq!(state.scroll, 0);
        state.apply(KeyAction::Bottom, 10, 4);
        assert_eq!(state.scroll, 10);

        state.apply(KeyAction::ToggleExpanders, 10, 4);
        assert!(state.expand_all);
        assert_eq!(state.scroll, 0);

        assert!(!state.apply(KeyAction::Quit, 10, 4));
        assert_eq!(state.current(), Some(Page::Frontend));
    }

    #[test]
    fn test_sidebar_visibility() {
        let state = SelectionState::new(menu(), Page::Home);
        assert!(state.sidebar_visible);

        let mut state = SelectionState::new(menu(), Page::Home).with_sidebar(false);
        assert!(!state.sidebar_visible);
        assert!(!state.apply(KeyAction::ToggleSidebar, 0, 1));
        assert!(state.sidebar_visible);
        assert_eq!(state.current(), Some(Page::Home));
    }

    fn items() -> Vec<LayoutItem> {
        let mut doc = Document::new();
        doc.title("Title")
            .animation(AnimationData::new(json!({"fr": 30, "ip": 0, "op": 30})), 100)
            .markdown("one\n\ntwo\n\nthree");
        layout(&doc, &LayoutOptions::default())
    }

    #[test]
    fn test_visible_range() {
        let items = items();
        let rows: Vec<usize> = items.iter().map(LayoutItem::rows).collect();
        // title, blank, animation (5 rows), blank, one, blank, two, blank, three
        assert_eq!(rows, vec![1, 1, 5, 1, 1, 1, 1, 1, 1]);

        assert_eq!(visible_range(&items, 0, 7), 0..3);
        assert_eq!(visible_range(&items, 3, 100), 3..9);
        assert_eq!(visible_range(&items, 2, 2), 2..3);
        assert_eq!(visible_range(&items, 20, 5), 9..9);
    }

    #[test]
    fn test_max_offset() {
        let items = items();
        assert_eq!(max_offset(&items, 100), 0);
        assert_eq!(max_offset(&items, 6), 3);
        assert_eq!(max_offset(&items, 1), 8);
        assert_eq!(max_offset(&[], 10), 0);
    }
}
