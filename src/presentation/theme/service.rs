use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub result_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut selection_bg_hsl = accent_hsl;
        selection_bg_hsl.l = 0.2;
        selection_bg_hsl.s = 0.3;
        let selection_bg = ColorConverter::to_ratatui(selection_bg_hsl);

        let selection_style = Style::default().bg(selection_bg).fg(Color::White);

        let mut result_bg_hsl = ColorConverter::to_hsl(Color::Green);
        result_bg_hsl.l = 0.15;
        result_bg_hsl.s = 0.5;
        let result_style = Style::default()
            .bg(ColorConverter::to_ratatui(result_bg_hsl))
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD);

        Self {
            accent,
            selection_style,
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            result_style,
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let expanded = match s.len() {
        6 => s.to_string(),
        3 => s.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| ());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}
