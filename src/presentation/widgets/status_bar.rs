//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusLevel {
    /// Informational.
    Info,
    /// Nothing can be done right now.
    Disabled,
}

pub struct StatusBarStyle {
    pub info: Style,
    pub disabled: Style,
}

impl StatusBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            info: theme.accent_style().add_modifier(Modifier::BOLD),
            disabled: theme.dimmed_style,
        }
    }
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// One-line centered status message.
pub struct StatusBar {
    message: String,
    level: StatusLevel,
    style: StatusBarStyle,
}

impl StatusBar {
    #[must_use]
    fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
            style: StatusBarStyle::default(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Info)
    }

    #[must_use]
    pub fn disabled(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Disabled)
    }

    #[must_use]
    pub fn style(mut self, style: StatusBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.level {
            StatusLevel::Info => self.style.info,
            StatusLevel::Disabled => self.style.disabled,
        };

        Paragraph::new(Line::from(Span::styled(self.message, style)).centered()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn render(bar: StatusBar, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_center_is_centered() {
        let buf = render(StatusBar::info("Spin"), 10);

        assert_eq!(buf[(3, 0)].symbol(), "S");
        assert_eq!(buf[(6, 0)].symbol(), "n");
        assert_eq!(buf[(3, 0)].fg, Color::Cyan);
    }

    #[test]
    fn test_info_follows_accent() {
        let style = StatusBarStyle::from_theme(&Theme::new("Magenta"));
        let buf = render(StatusBar::info("x").style(style), 3);

        assert_eq!(buf[(1, 0)].fg, Color::Magenta);
        assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_disabled_is_dimmed() {
        let buf = render(StatusBar::disabled("x"), 3);

        assert_eq!(buf[(1, 0)].fg, Color::DarkGray);
        assert!(!buf[(1, 0)].modifier.contains(Modifier::BOLD));
    }
}
