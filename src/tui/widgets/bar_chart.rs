//! Draws a sampled scene as vertical bars.
//!
//! Bar geometry arrives in layout units and is scaled to the widget area at
//! draw time. Heights are drawn with eighth-block characters so slow
//! transitions stay smooth. A bar's value label sits on the row above its
//! top edge when the bar is wide enough to hold it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::render::{BarFrame, Layout};

/// Partial cells, from one eighth to seven eighths.
const EIGHTHS: [&str; 7] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";

pub struct SceneChart<'a> {
    frames: &'a [BarFrame],
    layout: &'a Layout,
    label_style: Style,
}

impl<'a> SceneChart<'a> {
    pub fn new(frames: &'a [BarFrame], layout: &'a Layout) -> Self {
        Self {
            frames,
            layout,
            label_style: Style::default(),
        }
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

/// Column span of a bar: `[left, right)` relative to the area.
fn columns(frame: &BarFrame, layout: &Layout, width: u16) -> (u16, u16) {
    let scale = f64::from(width) / layout.width;
    let left = (frame.geometry.x * scale).round().max(0.0);
    let right = ((frame.geometry.x + frame.geometry.width) * scale).round();
    let left = (left as u16).min(width.saturating_sub(1));
    let right = (right.max(0.0) as u16).clamp(left + 1, width.max(left + 1));
    (left, right)
}

/// Bar height in eighths of a row.
fn eighths(frame: &BarFrame, layout: &Layout, rows: u16) -> u32 {
    let fraction = (frame.geometry.height / layout.height).clamp(0.0, 1.0);
    (fraction * f64::from(rows) * 8.0).round() as u32
}

impl Widget for SceneChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.layout.width <= 0.0 || self.layout.height <= 0.0 {
            return;
        }
        let baseline = area.bottom() - 1;

        for frame in self.frames {
            let (left, right) = columns(frame, self.layout, area.width);
            let fill = Style::default().fg(Color::from(frame.color));
            let height = eighths(frame, self.layout, area.height);
            let full_rows = (height / 8) as u16;
            let partial = (height % 8) as usize;

            for col in left..right.min(area.width) {
                let x = area.x + col;
                for row in 0..full_rows {
                    if let Some(cell) = buf.cell_mut((x, baseline - row)) {
                        cell.set_symbol(FULL).set_style(fill);
                    }
                }
                if partial > 0 && full_rows < area.height {
                    if let Some(cell) = buf.cell_mut((x, baseline - full_rows)) {
                        cell.set_symbol(EIGHTHS[partial - 1]).set_style(fill);
                    }
                }
            }

            // Label on the first row above the bar
            let occupied = full_rows + u16::from(partial > 0);
            if occupied >= area.height {
                continue;
            }
            let label = frame.value.to_string();
            let span = right.min(area.width) - left;
            let label_width = label.width() as u16;
            if label_width > span {
                continue;
            }
            let x = area.x + left + (span - label_width) / 2;
            buf.set_string(x, baseline - occupied, &label, self.label_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Geometry, Rgb};
    use ratatui::{backend::TestBackend, Terminal};

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn bar(value: u32, x: f64, width: f64, height: f64) -> BarFrame {
        BarFrame {
            id: 0,
            value,
            geometry: Geometry { x, width, height },
            color: RED,
        }
    }

    fn draw(frames: &[BarFrame], layout: Layout, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(SceneChart::new(frames, &layout), f.area()))
            .unwrap();
        terminal
    }

    fn layout(width: f64, height: f64) -> Layout {
        Layout {
            width,
            height,
            padding: 0.0,
        }
    }

    #[test]
    fn full_height_bar_fills_the_column() {
        let terminal = draw(&[bar(9, 0.0, 4.0, 8.0)], layout(4.0, 8.0), 4, 8);
        let buffer = terminal.backend().buffer();
        for y in 0..8 {
            assert_eq!(buffer[(0, y)].symbol(), FULL);
        }
        assert_eq!(buffer[(3, 0)].fg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn label_sits_above_the_bar() {
        let terminal = draw(&[bar(42, 0.0, 4.0, 4.0)], layout(4.0, 8.0), 4, 8);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 4)].symbol(), FULL);
        assert_eq!(buffer[(0, 3)].symbol(), " ");
        assert_eq!(buffer[(1, 3)].symbol(), "4");
        assert_eq!(buffer[(2, 3)].symbol(), "2");
    }

    #[test]
    fn fractional_heights_use_eighth_blocks() {
        let terminal = draw(&[bar(1, 0.0, 4.0, 0.5)], layout(4.0, 8.0), 4, 8);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 7)].symbol(), "▄");
        assert_eq!(buffer[(0, 6)].symbol(), " ");
    }

    #[test]
    fn geometry_scales_to_the_area() {
        // Layout 100 wide drawn into 10 columns: x=50 lands on column 5
        let terminal = draw(&[bar(7, 50.0, 20.0, 100.0)], layout(100.0, 100.0), 10, 4);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(4, 3)].symbol(), " ");
        assert_eq!(buffer[(5, 3)].symbol(), FULL);
        assert_eq!(buffer[(6, 3)].symbol(), FULL);
        assert_eq!(buffer[(7, 3)].symbol(), " ");
    }

    #[test]
    fn narrow_bars_skip_labels() {
        let terminal = draw(&[bar(100, 0.0, 1.0, 1.0)], layout(4.0, 8.0), 4, 8);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 6)].symbol(), " ");
    }

    #[test]
    fn zero_height_bars_draw_only_a_label() {
        let terminal = draw(&[bar(0, 0.0, 4.0, 0.0)], layout(4.0, 8.0), 4, 8);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 7)].symbol(), "0");
    }
}
