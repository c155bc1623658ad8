use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    WordList,
    Sidebar,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WordList => "WORDS",
            Self::Sidebar => "WORDBOOKS",
        }
    }

    const fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::WordList => &[
                ("Move", "j/k"),
                ("Toggle", "Enter"),
                ("Wordbooks", "C-b"),
                ("Quit", "q"),
            ],
            Self::Sidebar => &[
                ("Move", "j/k"),
                ("Select", "Enter"),
                ("Close", "Esc"),
                ("Quit", "q"),
            ],
        }
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub focus_indicator: Style,
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Bottom chrome line: focus context, key hints for that context, and a
/// right-aligned memorized summary.
pub struct FooterBar {
    focus_context: FocusContext,
    right_info: Option<String>,
    style: FooterBarStyle,
}

impl FooterBar {
    #[must_use]
    pub fn new(focus_context: FocusContext) -> Self {
        Self {
            focus_context,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn right_info(mut self, info: Option<String>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.focus_context.display_name()),
                self.style.focus_indicator,
            ),
            Span::raw(" "),
        ];

        for (i, (label, key)) in self.focus_context.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(format!(" {label} "), self.style.label_style));
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_spans = self.build_left_spans();
        let left_line = Line::from(left_spans);
        let left_para = Paragraph::new(left_line);
        let right_width = self
            .right_info
            .as_deref()
            .map_or(0, |s| s.chars().count() as u16);
        let left_width = area.width.saturating_sub(right_width + 1);

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        left_para.render(left_area, buf);

        if let Some(info) = self.right_info.as_deref() {
            if right_width < area.width {
                let right_x = area.right().saturating_sub(right_width);
                let right_area = Rect::new(right_x, area.y, right_width, 1);
                let right_line = Line::from(Span::styled(info.to_string(), self.style.info));
                Paragraph::new(right_line).render(right_area, buf);
            }
        }
    }
}
