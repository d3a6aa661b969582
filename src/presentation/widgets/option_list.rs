//! Option list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::wheel::slice_color;
use crate::presentation::theme::Theme;

const EMPTY_MESSAGE: &str = "No options added yet.";
const SWATCH: &str = "■ ";

pub struct OptionListStyle {
    pub border: Style,
    pub border_focused: Style,
    pub item: Style,
    pub selected: Style,
    pub empty: Style,
}

impl OptionListStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            border_focused: theme.accent_style(),
            item: theme.base_style,
            selected: theme.selection_style.add_modifier(Modifier::BOLD),
            empty: theme.dimmed_style,
        }
    }
}

impl Default for OptionListStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Options in wheel order, each with its slice color.
pub struct OptionList<'a> {
    options: &'a [String],
    focused: bool,
    style: OptionListStyle,
}

impl<'a> OptionList<'a> {
    #[must_use]
    pub fn new(options: &'a [String]) -> Self {
        Self {
            options,
            focused: false,
            style: OptionListStyle::default(),
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn style(mut self, style: OptionListStyle) -> Self {
        self.style = style;
        self
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.focused {
            self.style.border_focused
        } else {
            self.style.border
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Options ({}) ", self.options.len()))
    }
}

impl StatefulWidget for OptionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = self.block();

        if self.options.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(EMPTY_MESSAGE)
                .style(self.style.empty)
                .render(inner, buf);
            return;
        }

        let count = self.options.len();
        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| {
                ListItem::new(Line::from(vec![
                    Span::styled(SWATCH, Style::default().fg(slice_color(index, count))),
                    Span::styled(label.as_str(), self.style.item),
                ]))
            })
            .collect();

        let mut list = List::new(items).block(block);
        if self.focused {
            list = list
                .highlight_style(self.style.selected)
                .highlight_symbol("▶ ");
        }

        StatefulWidget::render(list, area, buf, state);
    }
}
