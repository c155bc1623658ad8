use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::domain::entities::{Category, Vocabulary};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{
    CategorySidebar, CategorySidebarAction, CategorySidebarData, CategorySidebarState,
    FocusContext, FooterBar, HeaderBar, SidebarVisibility, StartBanner, WordList, WordListAction,
    WordListData, WordListState,
};
use crate::{NAME, VERSION};

const WORDBOOK_CATEGORIES: [&str; 3] = ["Basic", "Advanced", "Test"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFocus {
    WordList,
    Sidebar,
}

impl WordListFocus {
    #[must_use]
    pub const fn to_focus_context(self) -> FocusContext {
        match self {
            Self::WordList => FocusContext::WordList,
            Self::Sidebar => FocusContext::Sidebar,
        }
    }
}

pub struct WordListScreenState {
    focus: WordListFocus,
    word_list_data: WordListData,
    word_list_state: WordListState,
    sidebar_data: CategorySidebarData,
    sidebar_state: CategorySidebarState,
    sidebar_width: u16,
}

impl WordListScreenState {
    #[must_use]
    pub fn new(ui: &UiConfig) -> Self {
        let mut word_list_state = WordListState::new();
        word_list_state.set_focused(true);

        let categories = WORDBOOK_CATEGORIES
            .iter()
            .copied()
            .map(Category::new)
            .collect();
        let mut sidebar_data = CategorySidebarData::new(categories);
        sidebar_data.set_active(0);

        let mut sidebar_state = CategorySidebarState::new();
        sidebar_state.set_animations_enabled(ui.enable_animations);

        Self {
            focus: WordListFocus::WordList,
            word_list_data: WordListData::new(),
            word_list_state,
            sidebar_data,
            sidebar_state,
            sidebar_width: ui.sidebar_width,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> WordListFocus {
        self.focus
    }

    #[must_use]
    pub fn is_sidebar_expanded(&self) -> bool {
        self.sidebar_state.is_expanded()
    }

    /// Replaces the displayed rows and re-validates the selection against
    /// the new length.
    pub fn set_rows(&mut self, rows: Vec<Vocabulary>) {
        self.word_list_data.set_rows(rows);
        self.word_list_state
            .clamp_selection(self.word_list_data.row_count());
    }

    pub fn set_row_memorized(&mut self, index: usize, memorized: bool) {
        self.word_list_data.set_memorized(index, memorized);
    }

    pub fn set_load_error(&mut self, error: String) {
        self.word_list_data.set_error(error);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.word_list_data.row_count()
    }

    #[must_use]
    pub fn memorized_count(&self) -> usize {
        self.word_list_data.memorized_count()
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        self.word_list_state.selected()
    }

    #[must_use]
    pub fn sidebar_category(&self, index: usize) -> Option<&Category> {
        self.sidebar_data.category(index)
    }

    #[must_use]
    pub fn active_category(&self) -> Option<usize> {
        self.sidebar_data.active()
    }

    /// Flips the sidebar between collapsed and expanded and moves the
    /// focus with it.
    pub fn toggle_sidebar(&mut self) {
        match self.sidebar_state.toggle() {
            SidebarVisibility::Expanded => self.set_focus(WordListFocus::Sidebar),
            SidebarVisibility::Collapsed => self.set_focus(WordListFocus::WordList),
        }
    }

    /// Collapses the sidebar and returns focus to the word list.
    pub fn collapse_sidebar(&mut self) {
        self.sidebar_state.collapse();
        self.set_focus(WordListFocus::WordList);
    }

    /// Advances the sidebar slide. Returns true while the panel is still
    /// moving and another frame is needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.sidebar_state.tick(elapsed)
    }

    fn set_focus(&mut self, focus: WordListFocus) {
        self.focus = focus;
        self.word_list_state
            .set_focused(focus == WordListFocus::WordList);
        self.sidebar_state
            .set_focused(focus == WordListFocus::Sidebar);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WordListKeyResult {
        if let Some(result) = self.handle_global_key(key) {
            return result;
        }

        match self.focus {
            WordListFocus::WordList => self.handle_word_list_key(key),
            WordListFocus::Sidebar => self.handle_sidebar_key(key),
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<WordListKeyResult> {
        if EventHandler::is_quit_event(&key) {
            return Some(WordListKeyResult::Quit);
        }
        if EventHandler::is_toggle_sidebar_event(&key) {
            self.toggle_sidebar();
            return Some(WordListKeyResult::Consumed);
        }
        None
    }

    fn handle_word_list_key(&mut self, key: KeyEvent) -> WordListKeyResult {
        if let Some(action) = self.word_list_state.handle_key(key, &self.word_list_data) {
            match action {
                WordListAction::ToggleMemorize(index) => {
                    return WordListKeyResult::ToggleMemorize(index);
                }
            }
        }
        WordListKeyResult::Consumed
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) -> WordListKeyResult {
        if let Some(action) = self.sidebar_state.handle_key(key, &self.sidebar_data) {
            match action {
                CategorySidebarAction::SelectCategory(index) => {
                    self.sidebar_data.set_active(index);
                    self.collapse_sidebar();
                    return WordListKeyResult::CategorySelected(index);
                }
                CategorySidebarAction::Close => {
                    self.collapse_sidebar();
                }
            }
        }
        WordListKeyResult::Consumed
    }

    #[must_use]
    pub const fn word_list_data(&self) -> &WordListData {
        &self.word_list_data
    }

    pub const fn word_list_parts_mut(&mut self) -> (&WordListData, &mut WordListState) {
        (&self.word_list_data, &mut self.word_list_state)
    }

    pub const fn sidebar_parts_mut(&mut self) -> (&CategorySidebarData, &mut CategorySidebarState) {
        (&self.sidebar_data, &mut self.sidebar_state)
    }
}

/// Outcome of a key press, for the orchestrator to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListKeyResult {
    Consumed,
    Quit,
    ToggleMemorize(usize),
    CategorySelected(usize),
}

pub struct WordListScreen;

impl WordListScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WordListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for WordListScreen {
    type State = WordListScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let main_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [header_area, content_area, banner_area, footer_area] = main_layout.areas(area);

        render_header_bar(state, header_area, buf);
        render_word_list(state, content_area, buf);
        render_start_banner(banner_area, buf);
        render_footer_bar(state, footer_area, buf);

        // The sidebar slides in above the list and the banner, never over
        // the header or footer rows.
        render_sidebar(state, content_area.union(banner_area), buf);
    }
}

fn render_header_bar(state: &WordListScreenState, area: Rect, buf: &mut Buffer) {
    let header = HeaderBar::new(NAME, VERSION).title_visible(!state.sidebar_state.is_expanded());
    Widget::render(header, area, buf);
}

fn render_word_list(state: &mut WordListScreenState, area: Rect, buf: &mut Buffer) {
    let (data, list_state) = state.word_list_parts_mut();
    let list = WordList::new(data);
    StatefulWidget::render(list, area, buf, list_state);
}

fn render_start_banner(area: Rect, buf: &mut Buffer) {
    Widget::render(StartBanner::new(), area, buf);
}

fn render_footer_bar(state: &WordListScreenState, area: Rect, buf: &mut Buffer) {
    let memorized = state.memorized_count();
    let total = state.row_count();

    let right_info = if total > 0 {
        Some(format!("{memorized}/{total} memorized"))
    } else {
        None
    };

    let footer = FooterBar::new(state.focus().to_focus_context()).right_info(right_info);
    Widget::render(footer, area, buf);
}

fn render_sidebar(state: &mut WordListScreenState, area: Rect, buf: &mut Buffer) {
    if !state.sidebar_state.is_visible() {
        return;
    }

    let width = state.sidebar_width;
    let (data, sidebar_state) = state.sidebar_parts_mut();
    let sidebar = CategorySidebar::new(data).width(width);
    StatefulWidget::render(sidebar, area, buf, sidebar_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn sample_rows() -> Vec<Vocabulary> {
        vec![
            Vocabulary::new("apple", "a round fruit"),
            Vocabulary::new("banana", "a long yellow fruit").with_memorized(true),
            Vocabulary::new("cherry", "a small stone fruit"),
        ]
    }

    fn screen_state() -> WordListScreenState {
        WordListScreenState::new(&UiConfig::default())
    }

    #[test]
    fn test_screen_state_creation() {
        let state = screen_state();

        assert_eq!(state.focus(), WordListFocus::WordList);
        assert!(!state.is_sidebar_expanded());
        assert_eq!(state.row_count(), 0);
        assert_eq!(state.active_category(), Some(0));
    }

    #[test]
    fn test_set_rows_selects_first_row() {
        let mut state = screen_state();

        state.set_rows(sample_rows());

        assert_eq!(state.row_count(), 3);
        assert_eq!(state.selected_row(), Some(0));
    }

    #[test]
    fn test_toggle_sidebar_moves_focus_both_ways() {
        let mut state = screen_state();

        state.toggle_sidebar();
        assert!(state.is_sidebar_expanded());
        assert_eq!(state.focus(), WordListFocus::Sidebar);

        state.toggle_sidebar();
        assert!(!state.is_sidebar_expanded());
        assert_eq!(state.focus(), WordListFocus::WordList);
    }

    #[test]
    fn test_ctrl_b_toggles_sidebar() {
        let mut state = screen_state();
        let ctrl_b = make_key_event(KeyCode::Char('b'), KeyModifiers::CONTROL);

        assert_eq!(state.handle_key(ctrl_b), WordListKeyResult::Consumed);
        assert!(state.is_sidebar_expanded());

        assert_eq!(state.handle_key(ctrl_b), WordListKeyResult::Consumed);
        assert!(!state.is_sidebar_expanded());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = screen_state();

        let q = make_key_event(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(state.handle_key(q), WordListKeyResult::Quit);

        let ctrl_c = make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(ctrl_c), WordListKeyResult::Quit);
    }

    #[test]
    fn test_enter_requests_memorize_toggle() {
        let mut state = screen_state();
        state.set_rows(sample_rows());

        let down = make_key_event(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(state.handle_key(down), WordListKeyResult::Consumed);

        let enter = make_key_event(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            state.handle_key(enter),
            WordListKeyResult::ToggleMemorize(1)
        );
    }

    #[test]
    fn test_category_selection_closes_sidebar() {
        let mut state = screen_state();
        state.set_rows(sample_rows());

        state.toggle_sidebar();
        assert!(state.is_sidebar_expanded());

        let down = make_key_event(KeyCode::Down, KeyModifiers::NONE);
        state.handle_key(down);

        let enter = make_key_event(KeyCode::Enter, KeyModifiers::NONE);
        let result = state.handle_key(enter);

        assert_eq!(result, WordListKeyResult::CategorySelected(1));
        assert!(!state.is_sidebar_expanded());
        assert_eq!(state.focus(), WordListFocus::WordList);
        assert_eq!(state.active_category(), Some(1));
    }

    #[test]
    fn test_escape_closes_sidebar_without_selection() {
        let mut state = screen_state();
        state.toggle_sidebar();

        let esc = make_key_event(KeyCode::Esc, KeyModifiers::NONE);
        let result = state.handle_key(esc);

        assert_eq!(result, WordListKeyResult::Consumed);
        assert!(!state.is_sidebar_expanded());
        assert_eq!(state.focus(), WordListFocus::WordList);
        assert_eq!(state.active_category(), Some(0));
    }

    #[test]
    fn test_memorized_count_follows_row_updates() {
        let mut state = screen_state();
        state.set_rows(sample_rows());
        assert_eq!(state.memorized_count(), 1);

        state.set_row_memorized(1, false);
        assert_eq!(state.memorized_count(), 0);

        state.set_row_memorized(0, true);
        state.set_row_memorized(2, true);
        assert_eq!(state.memorized_count(), 2);
    }

    #[test]
    fn test_tick_reports_sidebar_motion() {
        let mut state = screen_state();
        assert!(!state.tick(Duration::from_millis(33)));

        state.toggle_sidebar();
        assert!(state.tick(Duration::from_millis(33)));

        state.tick(Duration::from_millis(500));
        assert!(!state.tick(Duration::from_millis(33)));
    }
}
