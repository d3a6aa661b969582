//! Wheel widget.
//!
//! Rendering is a pure function of the option list and the rotation angle.
//! Each terminal cell holds two stacked half-block pixels, which keeps the
//! wheel close to round on common fonts.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::wheel::{
    SLICE_LIGHTNESS, SLICE_SATURATION, slice_at, slice_hue, slice_mid_angle,
};
use crate::presentation::theme::{ColorConverter, Theme};

const EMPTY_MESSAGE: &str = "Add options to create a wheel";
const TOO_SMALL_MESSAGE: &str = "Enlarge the window to see the wheel";

/// Columns kept free right of the wheel for the pointer.
const POINTER_COLUMNS: u16 = 2;
const POINTER_SYMBOL: &str = "◀";
const MIN_RADIUS: f64 = 2.0;
/// Distance in pixels between the rim and the end of a label.
const LABEL_INSET: f64 = 1.0;
/// Share of the radius a label may cover.
const LABEL_SPAN: f64 = 0.8;

/// Fill color of slice `index` out of `count`.
#[must_use]
pub fn slice_color(index: usize, count: usize) -> Color {
    ColorConverter::from_hsl(slice_hue(index, count), SLICE_SATURATION, SLICE_LIGHTNESS)
}

pub struct WheelStyle {
    pub label: Style,
    pub pointer: Style,
    pub placeholder: Style,
}

impl WheelStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label: Style::default().fg(Color::Black),
            pointer: theme.accent_style().add_modifier(Modifier::BOLD),
            placeholder: theme.dimmed_style,
        }
    }
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Pixel-space placement of the wheel inside a render area.
///
/// Pixel `x` runs over columns and pixel `y` over half rows, both relative to
/// the area origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    area: Rect,
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl WheelLayout {
    /// Fits the largest wheel into `area`, or `None` if it would be too small.
    #[must_use]
    pub fn new(area: Rect) -> Option<Self> {
        let usable = f64::from(area.width.saturating_sub(POINTER_COLUMNS));
        let center_x = usable / 2.0;
        let center_y = f64::from(area.height);
        let radius = center_x.min(center_y) - 0.5;

        (radius >= MIN_RADIUS).then_some(Self {
            area,
            center_x,
            center_y,
            radius,
        })
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Slice covering pixel (`x`, `y`), or `None` outside the rim.
    #[must_use]
    pub fn slice_at_pixel(&self, x: u16, y: u16, rotation: f64, count: usize) -> Option<usize> {
        let dx = f64::from(x) + 0.5 - self.center_x;
        let dy = f64::from(y) + 0.5 - self.center_y;
        if dx.hypot(dy) > self.radius {
            return None;
        }
        slice_at(dy.atan2(dx), rotation, count)
    }

    /// Buffer cell at `distance` pixels from the center along `angle`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, angle: f64, distance: f64) -> (u16, u16) {
        let px = (self.center_x + distance * angle.cos()).floor().max(0.0);
        let py = (self.center_y + distance * angle.sin()).floor().max(0.0);
        let col = (px as u16).min(self.area.width.saturating_sub(1));
        let row = (py as u16 / 2).min(self.area.height.saturating_sub(1));
        (self.area.x + col, self.area.y + row)
    }

    /// Cell holding the pointer, just outside the rim at angle 0.
    #[must_use]
    pub fn pointer_cell(&self) -> (u16, u16) {
        let (x, y) = self.cell_at(0.0, self.radius);
        (
            (x + 1).min(self.area.right().saturating_sub(1)),
            y,
        )
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn label_width(&self) -> usize {
        ((self.radius * LABEL_SPAN) as usize).max(1)
    }

    fn wheel_width(&self) -> u16 {
        self.area.width.saturating_sub(POINTER_COLUMNS)
    }
}

/// Pie wheel with one equal slice per option.
pub struct Wheel<'a> {
    options: &'a [String],
    angle: f64,
    style: WheelStyle,
}

impl<'a> Wheel<'a> {
    #[must_use]
    pub fn new(options: &'a [String], angle: f64) -> Self {
        Self {
            options,
            angle,
            style: WheelStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: WheelStyle) -> Self {
        self.style = style;
        self
    }

    fn render_message(&self, message: &str, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Line::from(message).centered())
            .style(self.style.placeholder)
            .render(line_area, buf);
    }

    fn render_slices(&self, layout: &WheelLayout, colors: &[Color], buf: &mut Buffer) {
        let count = self.options.len();
        let area = layout.area;

        for row in 0..area.height {
            for col in 0..layout.wheel_width() {
                let top = layout
                    .slice_at_pixel(col, row * 2, self.angle, count)
                    .map(|i| colors[i]);
                let bottom = layout
                    .slice_at_pixel(col, row * 2 + 1, self.angle, count)
                    .map(|i| colors[i]);

                let cell = &mut buf[(area.x + col, area.y + row)];
                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_char('▀').set_fg(top).set_bg(bottom);
                    }
                    (Some(top), None) => {
                        cell.set_char('▀').set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_char('▄').set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_labels(&self, layout: &WheelLayout, colors: &[Color], buf: &mut Buffer) {
        let count = self.options.len();
        let max_width = layout.label_width();
        let left_edge = layout.area.x;
        let right_edge = layout.area.x + layout.wheel_width();

        for (index, label) in self.options.iter().enumerate() {
            let mid = slice_mid_angle(index, count) + self.angle;
            let (col, row) = layout.cell_at(mid, layout.radius - LABEL_INSET);
            let text = truncate_label(label, max_width);
            let width = text.width() as u16;

            // text ends at the rim and runs toward the center
            let start = if mid.cos() >= 0.0 {
                col.saturating_sub(width.saturating_sub(1))
            } else {
                col
            };
            let start = start.max(left_edge);
            let room = right_edge.saturating_sub(start);
            if room == 0 {
                continue;
            }

            buf.set_stringn(
                start,
                row,
                text.as_ref(),
                usize::from(room),
                self.style.label.bg(colors[index]),
            );
        }
    }

    fn render_pointer(&self, layout: &WheelLayout, buf: &mut Buffer) {
        let (x, y) = layout.pointer_cell();
        buf.set_string(x, y, POINTER_SYMBOL, self.style.pointer);
    }
}

impl Widget for Wheel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.options.is_empty() {
            self.render_message(EMPTY_MESSAGE, area, buf);
            return;
        }

        let Some(layout) = WheelLayout::new(area) else {
            self.render_message(TOO_SMALL_MESSAGE, area, buf);
            return;
        };

        let count = self.options.len();
        let colors: Vec<Color> = (0..count).map(|i| slice_color(i, count)).collect();

        self.render_slices(&layout, &colors, buf);
        self.render_labels(&layout, &colors, buf);
        self.render_pointer(&layout, buf);
    }
}

fn truncate_label(label: &str, max_width: usize) -> Cow<'_, str> {
    if label.width() <= max_width {
        return Cow::Borrowed(label);
    }

    let mut truncated = String::new();
    let mut width = 0;
    for c in label.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        truncated.push(c);
        width += char_width;
    }
    truncated.push('…');
    Cow::Owned(truncated)
}
