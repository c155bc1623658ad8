//! Start prompt banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const START_PROMPT: &str = " Shall we start? ";
const HORIZONTAL_INSET: u16 = 2;

#[allow(missing_docs)]
pub struct StartBannerStyle {
    pub background: Style,
    pub label: Style,
}

impl Default for StartBannerStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Passive banner under the word list echoing the start prompt.
///
/// Renders the affordance only; no action is bound to it.
pub struct StartBanner {
    style: StartBannerStyle,
}

impl StartBanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: StartBannerStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: StartBannerStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for StartBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StartBanner {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_style(self.style.background);
            }
        }

        let inset = if area.width > 2 * HORIZONTAL_INSET {
            HORIZONTAL_INSET
        } else {
            0
        };
        let banner = Rect::new(
            area.x + inset,
            area.y,
            area.width - 2 * inset,
            area.height,
        );

        for y in banner.top()..banner.bottom() {
            for x in banner.left()..banner.right() {
                buf[(x, y)].set_char(' ').set_style(self.style.label);
            }
        }

        let prompt_width = (START_PROMPT.chars().count() as u16).min(banner.width);
        let text_x = banner.x + (banner.width.saturating_sub(prompt_width)) / 2;
        let text_y = banner.y + banner.height / 2;
        let text_area = Rect::new(text_x, text_y, prompt_width, 1);

        Paragraph::new(Line::from(Span::styled(START_PROMPT, self.style.label)))
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_centered() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));

        StartBanner::new().render(buf.area, &mut buf);

        // Banner spans x 2..28; the 17-column prompt starts at x 6.
        assert_eq!(buf[(7, 1)].symbol(), "S");
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }

    #[test]
    fn test_zero_height_is_skipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));

        StartBanner::new().render(Rect::new(0, 0, 30, 0), &mut buf);

        assert_eq!(buf[(10, 0)].symbol(), " ");
    }
}
