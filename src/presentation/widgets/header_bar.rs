use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SIDEBAR_HINT_KEY: &str = " C-b ";
const SIDEBAR_HINT_LABEL: &str = "Wordbooks ";

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub hint_key: Style,
    pub hint_label: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            hint_key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top chrome line: the app title block on the left and the sidebar
/// toggle hint on the right. The title is hidden while the sidebar is
/// expanded, mirroring how the panel takes over the screen.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title_visible: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title_visible: true,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn title_visible(mut self, visible: bool) -> Self {
        self.title_visible = visible;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_width = if self.title_visible {
            let left_spans = vec![
                Span::styled(
                    format!(" {} ", self.app_name.to_uppercase()),
                    self.style.app_name,
                ),
                Span::raw(" "),
                Span::styled(format!(" v{} ", self.version), self.style.version),
            ];

            let left_line = Line::from(left_spans);
            // " APP " (len+2) + " " (1) + " vVER " (len+3)
            let left_width = (self.app_name.len() + 2 + 1 + self.version.len() + 3) as u16;
            let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
            Paragraph::new(left_line).render(left_area, buf);
            left_width
        } else {
            0
        };

        let hint_width = (SIDEBAR_HINT_KEY.len() + SIDEBAR_HINT_LABEL.len()) as u16;
        if hint_width < area.width.saturating_sub(left_width) {
            let hint_spans = vec![
                Span::styled(SIDEBAR_HINT_KEY, self.style.hint_key),
                Span::styled(SIDEBAR_HINT_LABEL, self.style.hint_label),
            ];
            let right_x = area.right().saturating_sub(hint_width);
            let right_area = Rect::new(right_x, area.y, hint_width, 1);
            Paragraph::new(Line::from(hint_spans)).render(right_area, buf);
        }
    }
}
