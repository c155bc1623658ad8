//! Slide-out wordbook sidebar widget.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::domain::entities::Category;

/// Fixed duration of the slide between collapsed and expanded.
const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Visibility states of the sidebar panel.
///
/// Both transitions are triggered by the same toggle control; the slide
/// animation interpolates the panel width between the two states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVisibility {
    /// Panel hidden; the word list has focus.
    #[default]
    Collapsed,
    /// Panel shown over the right edge of the content area.
    Expanded,
}

impl SidebarVisibility {
    /// Returns the other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Action requested by the sidebar in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySidebarAction {
    /// A wordbook category was picked.
    SelectCategory(usize),
    /// Close the panel without picking.
    Close,
}

/// Categories rendered by the sidebar.
pub struct CategorySidebarData {
    categories: Vec<Category>,
    active: Option<usize>,
}

impl CategorySidebarData {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            active: None,
        }
    }

    /// Marks a category as the active wordbook. Out-of-range indices are
    /// ignored.
    pub fn set_active(&mut self, index: usize) {
        if index < self.categories.len() {
            self.active = Some(index);
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Visibility, slide, selection, and focus state of the sidebar.
pub struct CategorySidebarState {
    list_state: ListState,
    visibility: SidebarVisibility,
    slide_progress: f32,
    animations_enabled: bool,
    focused: bool,
}

impl CategorySidebarState {
    #[must_use]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            list_state,
            visibility: SidebarVisibility::Collapsed,
            slide_progress: 0.0,
            animations_enabled: true,
            focused: false,
        }
    }

    /// Disabling animations makes the panel snap between states.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Flips between collapsed and expanded and returns the new state.
    pub fn toggle(&mut self) -> SidebarVisibility {
        self.visibility = self.visibility.toggled();
        if !self.animations_enabled {
            self.slide_progress = self.target_progress();
        }
        self.visibility
    }

    /// Collapses the panel, e.g. after a category selection.
    pub fn collapse(&mut self) {
        self.visibility = SidebarVisibility::Collapsed;
        if !self.animations_enabled {
            self.slide_progress = 0.0;
        }
    }

    #[must_use]
    pub fn visibility(&self) -> SidebarVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.visibility == SidebarVisibility::Expanded
    }

    /// Returns whether any part of the panel is on screen, including
    /// while sliding shut.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.slide_progress > 0.0
    }

    #[must_use]
    pub fn slide_progress(&self) -> f32 {
        self.slide_progress
    }

    /// Advances the slide toward the current visibility target. Returns
    /// true while the panel is still moving.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let target = self.target_progress();
        if (self.slide_progress - target).abs() < f32::EPSILON {
            return false;
        }

        let step = elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
        self.slide_progress = if target > self.slide_progress {
            (self.slide_progress + step).min(1.0)
        } else {
            (self.slide_progress - step).max(0.0)
        };

        true
    }

    fn target_progress(&self) -> f32 {
        match self.visibility {
            SidebarVisibility::Collapsed => 0.0,
            SidebarVisibility::Expanded => 1.0,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }

        let next = self
            .list_state
            .selected()
            .map_or(0, |idx| (idx + 1) % category_count);
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }

        let previous = self.list_state.selected().map_or(0, |idx| {
            if idx == 0 { category_count - 1 } else { idx - 1 }
        });
        self.list_state.select(Some(previous));
    }

    pub fn select_first(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.list_state.select(Some(category_count - 1));
    }

    /// Handles a key while the sidebar is focused.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        data: &CategorySidebarData,
    ) -> Option<CategorySidebarAction> {
        let category_count = data.category_count();

        match (key.code, key.modifiers) {
            (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
                self.select_next(category_count);
                None
            }
            (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
                self.select_previous(category_count);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.select_first(category_count);
                None
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.select_last(category_count);
                None
            }
            (KeyCode::Enter | KeyCode::Char(' '), _) => self
                .selected()
                .filter(|&idx| data.category(idx).is_some())
                .map(CategorySidebarAction::SelectCategory),
            (KeyCode::Esc, KeyModifiers::NONE) => Some(CategorySidebarAction::Close),
            _ => None,
        }
    }
}

impl Default for CategorySidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(missing_docs)]
pub struct CategorySidebarStyle {
    pub border_style: Style,
    pub border_style_focused: Style,
    pub title_style: Style,
    pub category_style: Style,
    pub active_category_style: Style,
    pub selected_style: Style,
}

impl Default for CategorySidebarStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::Gray),
            border_style_focused: Style::default().fg(Color::Cyan),
            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            category_style: Style::default().fg(Color::White),
            active_category_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selected_style: Style::default().bg(Color::DarkGray),
        }
    }
}

/// Widget for the slide-out wordbook panel, rendered as a right-anchored
/// overlay above the content area.
#[allow(missing_docs)]
pub struct CategorySidebar<'a> {
    data: &'a CategorySidebarData,
    style: CategorySidebarStyle,
    width: u16,
}

impl<'a> CategorySidebar<'a> {
    #[must_use]
    pub fn new(data: &'a CategorySidebarData) -> Self {
        Self {
            data,
            style: CategorySidebarStyle::default(),
            width: 32,
        }
    }

    #[must_use]
    pub fn style(mut self, style: CategorySidebarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the fully expanded panel width in columns.
    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

impl StatefulWidget for CategorySidebar<'_> {
    type State = CategorySidebarState;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let max_width = self.width.min(area.width);
        let slide = ease_out_quad(state.slide_progress());
        let width = (f32::from(max_width) * slide).round() as u16;
        if width == 0 {
            return;
        }

        let panel = Rect::new(
            area.x + area.width.saturating_sub(width),
            area.y,
            width,
            area.height,
        );
        let intersection = area.intersection(panel);
        if intersection.area() == 0 {
            return;
        }

        Clear.render(intersection, buf);

        let border_style = if state.is_focused() {
            self.style.border_style_focused
        } else {
            self.style.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Wordbooks ", self.style.title_style));

        let inner_area = block.inner(intersection);
        block.render(intersection, buf);

        let items: Vec<ListItem> = self
            .data
            .categories()
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                let style = if self.data.active() == Some(idx) {
                    self.style.active_category_style
                } else {
                    self.style.category_style
                };
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(category.label(), style),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(self.style.selected_style);

        StatefulWidget::render(list, inner_area, buf, &mut state.list_state);
    }
}

/// Quadratic ease-out, fast at the start and settling at the end.
fn ease_out_quad(t: f32) -> f32 {
    let inverse = 1.0 - t;
    1.0 - inverse * inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn sample_data() -> CategorySidebarData {
        CategorySidebarData::new(vec![
            Category::new("Basic"),
            Category::new("Advanced"),
            Category::new("Test"),
        ])
    }

    #[test]
    fn test_sidebar_starts_collapsed() {
        let state = CategorySidebarState::new();

        assert_eq!(state.visibility(), SidebarVisibility::Collapsed);
        assert!(!state.is_expanded());
        assert!(!state.is_visible());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut state = CategorySidebarState::new();

        assert_eq!(state.toggle(), SidebarVisibility::Expanded);
        assert_eq!(state.toggle(), SidebarVisibility::Collapsed);
        assert_eq!(state.visibility(), SidebarVisibility::Collapsed);
    }

    #[test]
    fn test_slide_advances_and_settles() {
        let mut state = CategorySidebarState::new();
        state.toggle();

        assert!(state.tick(Duration::from_millis(150)));
        let midway = state.slide_progress();
        assert!(midway > 0.0 && midway < 1.0);

        assert!(state.tick(Duration::from_millis(300)));
        assert!((state.slide_progress() - 1.0).abs() < f32::EPSILON);

        assert!(!state.tick(Duration::from_millis(33)));
    }

    #[test]
    fn test_slide_reverses_when_collapsed_midway() {
        let mut state = CategorySidebarState::new();
        state.toggle();
        state.tick(Duration::from_millis(150));

        state.toggle();
        assert!(state.is_visible());

        state.tick(Duration::from_millis(300));
        assert!((state.slide_progress() - 0.0).abs() < f32::EPSILON);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_disabled_animations_snap() {
        let mut state = CategorySidebarState::new();
        state.set_animations_enabled(false);

        state.toggle();
        assert!((state.slide_progress() - 1.0).abs() < f32::EPSILON);
        assert!(!state.tick(Duration::from_millis(33)));

        state.collapse();
        assert!(!state.is_visible());
    }

    #[test_case(Some(0), Some(1) ; "advances")]
    #[test_case(Some(2), Some(0) ; "wraps_to_first")]
    fn test_select_next_wraps(initial: Option<usize>, expected: Option<usize>) {
        let mut state = CategorySidebarState::new();
        state.list_state.select(initial);

        state.select_next(3);

        assert_eq!(state.selected(), expected);
    }

    #[test_case(Some(2), Some(1) ; "moves_back")]
    #[test_case(Some(0), Some(2) ; "wraps_to_last")]
    fn test_select_previous_wraps(initial: Option<usize>, expected: Option<usize>) {
        let mut state = CategorySidebarState::new();
        state.list_state.select(initial);

        state.select_previous(3);

        assert_eq!(state.selected(), expected);
    }

    #[test]
    fn test_enter_selects_category() {
        let data = sample_data();
        let mut state = CategorySidebarState::new();
        state.select_next(data.category_count());

        let action = state.handle_key(make_key_event(KeyCode::Enter, KeyModifiers::NONE), &data);

        assert_eq!(action, Some(CategorySidebarAction::SelectCategory(1)));
    }

    #[test]
    fn test_escape_requests_close() {
        let data = sample_data();
        let mut state = CategorySidebarState::new();

        let action = state.handle_key(make_key_event(KeyCode::Esc, KeyModifiers::NONE), &data);

        assert_eq!(action, Some(CategorySidebarAction::Close));
    }

    #[test]
    fn test_set_active_ignores_out_of_range() {
        let mut data = sample_data();

        data.set_active(1);
        data.set_active(7);

        assert_eq!(data.active(), Some(1));
    }
}
