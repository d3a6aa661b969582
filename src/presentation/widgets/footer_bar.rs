use crate::domain::keybinding::{KeyScope, Keybind};
use crate::presentation::theme::{ColorConverter, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
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
    Input,
    Options,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Options => "OPTIONS",
        }
    }

    #[must_use]
    pub const fn key_scope(self) -> KeyScope {
        match self {
            Self::Input => KeyScope::Input,
            Self::Options => KeyScope::Options,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Input => Self::Options,
            Self::Options => Self::Input,
        }
    }
}

pub struct FooterBarStyle {
    pub label_style: Style,
    pub key_style: Style,
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let mut key_bg_hsl = ColorConverter::to_hsl(theme.accent);
        key_bg_hsl.l = 0.08;
        key_bg_hsl.s = 0.5;
        let key_bg = ColorConverter::to_ratatui(key_bg_hsl);

        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            focus_indicator: Style::default()
                .bg(key_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Key hints for the focused pane.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus: FocusContext,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind], focus: FocusContext) -> Self {
        Self {
            keybindings,
            focus,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn format_key(key: &KeyEvent) -> String {
        let name = match key.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Backspace => "Bksp".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            format!("C-{name}")
        } else {
            name
        }
    }

    fn visible_bindings(&self) -> impl Iterator<Item = &'a Keybind> + '_ {
        let scope = self.focus.key_scope();
        self.keybindings
            .iter()
            .filter(move |k| k.visible_in_bar && (k.scope == scope || k.scope == KeyScope::Global))
    }

    fn build_spans(&self) -> Vec<Span<'_>> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.focus.display_name()),
                self.style.focus_indicator,
            ),
            Span::raw(" "),
        ];

        for (i, binding) in self.visible_bindings().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(Line::from(self.build_spans())).render(area, buf);
    }
}
