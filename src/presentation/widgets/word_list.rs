//! Word list widget for displaying vocabulary rows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Vocabulary;

const MEMORIZED_TAG: &str = " memorized ";
const NOT_MEMORIZED_TAG: &str = " not yet ";

/// Action requested by the word list in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListAction {
    /// Flip the memorized flag of the row at this index.
    ToggleMemorize(usize),
}

/// Load state of the vocabulary rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    /// Waiting for the source fetch to finish.
    Loading,
    /// Rows reflect the loaded collection.
    Loaded,
    /// The fetch failed.
    Error,
}

/// Row data rendered by the word list.
pub struct WordListData {
    rows: Vec<Vocabulary>,
    loading_state: LoadingState,
    error_message: Option<String>,
}

impl WordListData {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            loading_state: LoadingState::Loading,
            error_message: None,
        }
    }

    pub fn set_rows(&mut self, rows: Vec<Vocabulary>) {
        self.rows = rows;
        self.loading_state = LoadingState::Loaded;
        self.error_message = None;
    }

    /// Updates one row's memorized flag. Out-of-range indices are ignored.
    pub fn set_memorized(&mut self, index: usize, memorized: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_memorized(memorized);
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.loading_state = LoadingState::Error;
        self.error_message = Some(error);
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Vocabulary> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vocabulary] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn memorized_count(&self) -> usize {
        self.rows.iter().filter(|v| v.is_memorized()).count()
    }

    #[must_use]
    pub fn loading_state(&self) -> LoadingState {
        self.loading_state
    }
}

impl Default for WordListData {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection and focus state of the word list.
pub struct WordListState {
    list_state: ListState,
    focused: bool,
}

impl WordListState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        let next = match self.list_state.selected() {
            Some(idx) => (idx + 1).min(row_count - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        let previous = match self.list_state.selected() {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    pub fn select_first(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.list_state.select(Some(row_count - 1));
    }

    pub fn clear_selection(&mut self) {
        self.list_state.select(None);
    }

    /// Re-validates the selection after the row set changed: an empty list
    /// clears it, otherwise it is clamped into range and defaults to the
    /// first row.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.list_state.select(None);
            return;
        }

        let clamped = self
            .list_state
            .selected()
            .map_or(0, |idx| idx.min(row_count - 1));
        self.list_state.select(Some(clamped));
    }

    /// Handles a key while the list is focused, translating row toggles
    /// into actions for the screen.
    pub fn handle_key(&mut self, key: KeyEvent, data: &WordListData) -> Option<WordListAction> {
        let row_count = data.row_count();

        match (key.code, key.modifiers) {
            (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
                self.select_next(row_count);
                None
            }
            (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
                self.select_previous(row_count);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.select_first(row_count);
                None
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.select_last(row_count);
                None
            }
            (KeyCode::Esc, KeyModifiers::NONE) => {
                self.clear_selection();
                None
            }
            (KeyCode::Enter | KeyCode::Char(' '), _) => self
                .selected()
                .filter(|&idx| data.row(idx).is_some())
                .map(WordListAction::ToggleMemorize),
            _ => None,
        }
    }
}

impl Default for WordListState {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(missing_docs)]
pub struct WordListStyle {
    pub border_style: Style,
    pub border_style_focused: Style,
    pub title_style: Style,
    pub name_style: Style,
    pub definition_style: Style,
    pub memorized_tag_style: Style,
    pub not_memorized_tag_style: Style,
    pub selected_style: Style,
    pub loading_style: Style,
    pub error_style: Style,
    pub empty_style: Style,
}

impl Default for WordListStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::Gray),
            border_style_focused: Style::default().fg(Color::Cyan),
            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            name_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            definition_style: Style::default().fg(Color::Gray),
            memorized_tag_style: Style::default().fg(Color::Black).bg(Color::Green),
            not_memorized_tag_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            selected_style: Style::default().bg(Color::DarkGray),
            loading_style: Style::default().fg(Color::Yellow),
            error_style: Style::default().fg(Color::Red),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Widget for displaying the vocabulary rows of the current wordbook.
#[allow(missing_docs)]
pub struct WordList<'a> {
    data: &'a WordListData,
    style: WordListStyle,
}

impl<'a> WordList<'a> {
    #[must_use]
    pub fn new(data: &'a WordListData) -> Self {
        Self {
            data,
            style: WordListStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: WordListStyle) -> Self {
        self.style = style;
        self
    }

    fn build_row(&self, word: &'a Vocabulary, width: u16) -> ListItem<'a> {
        let (tag, tag_style) = if word.is_memorized() {
            (MEMORIZED_TAG, self.style.memorized_tag_style)
        } else {
            (NOT_MEMORIZED_TAG, self.style.not_memorized_tag_style)
        };

        // Leading space + name on the left, tag right-aligned.
        let used = 1 + word.name().chars().count() + tag.chars().count();
        let padding = usize::from(width).saturating_sub(used).max(1);

        let name_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(word.name(), self.style.name_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(tag, tag_style),
        ]);
        let definition_line = Line::from(vec![
            Span::raw("   "),
            Span::styled(word.definition(), self.style.definition_style),
        ]);

        ListItem::new(Text::from(vec![name_line, definition_line, Line::raw("")]))
    }
}

impl StatefulWidget for WordList<'_> {
    type State = WordListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if state.is_focused() {
            self.style.border_style_focused
        } else {
            self.style.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Words ", self.style.title_style));

        let inner_area = block.inner(area);
        block.render(area, buf);

        match self.data.loading_state() {
            LoadingState::Loading => {
                let loading =
                    Paragraph::new("Loading vocabulary...").style(self.style.loading_style);
                loading.render(inner_area, buf);
                return;
            }
            LoadingState::Error => {
                let error_msg = self
                    .data
                    .error_message
                    .as_deref()
                    .unwrap_or("Unknown error");
                let error =
                    Paragraph::new(format!("Error: {error_msg}")).style(self.style.error_style);
                error.render(inner_area, buf);
                return;
            }
            LoadingState::Loaded => {}
        }

        if self.data.is_empty() {
            let empty = Paragraph::new("No words in this wordbook").style(self.style.empty_style);
            empty.render(inner_area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .data
            .rows()
            .iter()
            .map(|word| self.build_row(word, inner_area.width))
            .collect();

        let list = List::new(items).highlight_style(self.style.selected_style);

        StatefulWidget::render(list, inner_area, buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn sample_data() -> WordListData {
        let mut data = WordListData::new();
        data.set_rows(vec![
            Vocabulary::new("apple", "a round fruit"),
            Vocabulary::new("banana", "a long yellow fruit").with_memorized(true),
            Vocabulary::new("cherry", "a small stone fruit"),
        ]);
        data
    }

    #[test]
    fn test_data_starts_loading() {
        let data = WordListData::new();

        assert_eq!(data.loading_state(), LoadingState::Loading);
        assert!(data.is_empty());
    }

    #[test]
    fn test_set_rows_marks_loaded() {
        let data = sample_data();

        assert_eq!(data.loading_state(), LoadingState::Loaded);
        assert_eq!(data.row_count(), 3);
        assert_eq!(data.memorized_count(), 1);
    }

    #[test]
    fn test_set_memorized_ignores_out_of_range() {
        let mut data = sample_data();

        data.set_memorized(1, false);
        data.set_memorized(10, true);

        assert!(!data.row(1).unwrap().is_memorized());
        assert_eq!(data.memorized_count(), 0);
    }

    #[test_case(None, Some(0) ; "from_none_selects_first")]
    #[test_case(Some(0), Some(1) ; "advances_by_one")]
    #[test_case(Some(2), Some(2) ; "clamps_at_last_row")]
    fn test_select_next(initial: Option<usize>, expected: Option<usize>) {
        let mut state = WordListState::new();
        if let Some(idx) = initial {
            state.list_state.select(Some(idx));
        }

        state.select_next(3);

        assert_eq!(state.selected(), expected);
    }

    #[test_case(None, Some(0) ; "from_none_selects_first")]
    #[test_case(Some(2), Some(1) ; "moves_back_by_one")]
    #[test_case(Some(0), Some(0) ; "stays_at_first_row")]
    fn test_select_previous(initial: Option<usize>, expected: Option<usize>) {
        let mut state = WordListState::new();
        if let Some(idx) = initial {
            state.list_state.select(Some(idx));
        }

        state.select_previous(3);

        assert_eq!(state.selected(), expected);
    }

    #[test]
    fn test_navigation_on_empty_list_keeps_no_selection() {
        let mut state = WordListState::new();

        state.select_next(0);
        state.select_previous(0);
        state.select_last(0);

        assert_eq!(state.selected(), None);
    }

    #[test_case(KeyCode::Char('j'), Some(1) ; "j_moves_down")]
    #[test_case(KeyCode::Down, Some(1) ; "down_moves_down")]
    #[test_case(KeyCode::Char('k'), Some(0) ; "k_stays_at_first")]
    #[test_case(KeyCode::Up, Some(0) ; "up_stays_at_first")]
    fn test_handle_navigation_keys(code: KeyCode, expected: Option<usize>) {
        let data = sample_data();
        let mut state = WordListState::new();
        state.clamp_selection(data.row_count());

        let action = state.handle_key(make_key_event(code, KeyModifiers::NONE), &data);

        assert!(action.is_none());
        assert_eq!(state.selected(), expected);
    }

    #[test]
    fn test_jump_keys() {
        let data = sample_data();
        let mut state = WordListState::new();
        state.clamp_selection(data.row_count());

        state.handle_key(make_key_event(KeyCode::Char('G'), KeyModifiers::SHIFT), &data);
        assert_eq!(state.selected(), Some(2));

        state.handle_key(make_key_event(KeyCode::Char('g'), KeyModifiers::NONE), &data);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_enter_requests_toggle_for_selected_row() {
        let data = sample_data();
        let mut state = WordListState::new();
        state.select_next(data.row_count());
        state.select_next(data.row_count());

        let action = state.handle_key(make_key_event(KeyCode::Enter, KeyModifiers::NONE), &data);

        assert_eq!(action, Some(WordListAction::ToggleMemorize(1)));
    }

    #[test]
    fn test_enter_without_selection_does_nothing() {
        let data = sample_data();
        let mut state = WordListState::new();

        let action = state.handle_key(make_key_event(KeyCode::Enter, KeyModifiers::NONE), &data);

        assert_eq!(action, None);
    }

    #[test]
    fn test_escape_clears_selection() {
        let data = sample_data();
        let mut state = WordListState::new();
        state.select_next(data.row_count());

        let action = state.handle_key(make_key_event(KeyCode::Esc, KeyModifiers::NONE), &data);

        assert!(action.is_none());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_selection_after_rows_shrink() {
        let mut state = WordListState::new();
        state.select_last(5);
        assert_eq!(state.selected(), Some(4));

        state.clamp_selection(2);
        assert_eq!(state.selected(), Some(1));

        state.clamp_selection(0);
        assert_eq!(state.selected(), None);
    }
}
