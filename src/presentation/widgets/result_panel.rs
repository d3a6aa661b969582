use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const TITLE: &str = " Result: ";

pub struct ResultPanelStyle {
    pub border: Style,
    pub result: Style,
}

impl Default for ResultPanelStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            result: Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Label picked by the last completed spin.
pub struct ResultPanel<'a> {
    result: Option<&'a str>,
    style: ResultPanelStyle,
}

impl<'a> ResultPanel<'a> {
    #[must_use]
    pub fn new(result: Option<&'a str>) -> Self {
        Self {
            result,
            style: ResultPanelStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: ResultPanelStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(result) = self.result {
            Paragraph::new(Line::from(Span::styled(result, self.style.result)).centered())
                .render(inner, buf);
        }
    }
}
