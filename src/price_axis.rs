use std::cmp::max;

use ratatui::prelude::{Buffer, Style};

use crate::{
    symbols::{AXIS_BORDER, AXIS_DASH},
    Axis, CandlesInfo, ContextInfo, Float,
};

/// Rows between two labelled price ticks.
const LABEL_CADENCE: u16 = 4;

/// Fixed-width decimal formatter for price labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    precision: usize,
    scale: usize,
}

impl Default for Numeric {
    fn default() -> Self {
        Self::new(8, 3)
    }
}

impl Numeric {
    pub fn new(precision: usize, scale: usize) -> Self {
        Self { precision, scale }
    }

    pub fn format(&self, value: Float) -> String {
        let precision = self.precision;
        let scale = self.scale;
        format!("{0:>precision$.scale$}", value)
    }

    /// Widest label over the given price range.
    pub(crate) fn label_width(&self, min: Float, max_value: Float) -> usize {
        max(self.format(min).len(), self.format(max_value).len())
    }

    /// Band columns needed for labels plus border, tick dash and padding.
    pub(crate) fn band_width(&self, min: Float, max_value: Float) -> u16 {
        self.label_width(min, max_value) as u16 + 5
    }
}

/// Vertical price axis rendered into the left band.
///
/// The grid layer is a border column with a tick dash at every labelled row;
/// the label layer writes the price value at every [`LABEL_CADENCE`]-th row,
/// right-aligned against the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceAxis {
    numeric: Numeric,
}

impl Default for PriceAxis {
    fn default() -> Self {
        Self::new(Numeric::default())
    }
}

impl PriceAxis {
    pub fn new(numeric: Numeric) -> Self {
        Self { numeric }
    }

    fn is_label_row(row: u16) -> bool {
        row % LABEL_CADENCE == 0
    }
}

impl Axis for PriceAxis {
    fn draw(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        self.draw_grid_lines(ctx, candles, buf);
        self.draw_labels(ctx, candles, buf);
    }

    fn draw_grid_lines(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        let band = ctx.price_band();
        if band.width < 3 || band.height == 0 {
            return;
        }

        // border sits left of the dash column and the trailing padding column
        let border_x = band.right() - 3;
        for row in 0..band.height {
            let y = band.y + row;
            buf.get_mut(border_x, y).set_char(AXIS_BORDER);

            // tick dashes mark label positions; nothing to mark without data
            if Self::is_label_row(row) && !candles.is_empty() {
                buf.get_mut(border_x + 1, y).set_char(AXIS_DASH);
            }
        }
    }

    fn draw_labels(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        let band = ctx.price_band();
        if band.width < 5 || band.height == 0 || candles.is_empty() {
            return;
        }

        let scale = candles.price_scale();
        let width = (band.width - 5) as usize;
        for row in 0..band.height {
            if !Self::is_label_row(row) {
                continue;
            }

            let label = self.numeric.format(scale.value_at_row(row));
            if label.len() > width {
                continue;
            }

            let x = band.x + 1 + (width - label.len()) as u16;
            buf.set_string(x, band.y + row, label, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{assert_buffer_eq, buffer::Buffer, layout::Rect};

    use crate::{Axis, Candle, CandlesInfo, ContextInfo, Interval, Numeric, PriceAxis, PriceScale};

    #[test]
    fn test_format() {
        let numeric = Numeric::new(10, 2);
        assert_eq!(numeric.format(3.1415926535.into()), "      3.14");
        assert_eq!(numeric.format(99991.into()), "  99991.00");
    }

    fn context() -> ContextInfo {
        // 8-wide labels plus " │┈ " chrome, 8 chart rows, no time band
        ContextInfo::new(Rect::new(0, 0, 16, 8), 13, 0)
    }

    fn info(candles: &[Candle]) -> CandlesInfo<'_> {
        let scale = PriceScale::new(8, 100.0.into(), 200.0.into());
        CandlesInfo::new(candles, 0..candles.len(), scale, Interval::OneMinute)
    }

    #[test]
    fn draw_renders_border_ticks_and_labels() {
        let candles = vec![Candle::new(0, 120.0, 200.0, 100.0, 180.0).unwrap()];
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 8));

        PriceAxis::default().draw(&context(), &info(&candles), &mut buf);

        assert_buffer_eq!(
            buf,
            Buffer::with_lines(vec![
                "  200.000 │┈    ",
                "          │     ",
                "          │     ",
                "          │     ",
                "  150.000 │┈    ",
                "          │     ",
                "          │     ",
                "          │     ",
            ])
        );
    }

    #[test]
    fn split_passes_compose_to_draw() {
        let candles = vec![Candle::new(0, 120.0, 200.0, 100.0, 180.0).unwrap()];
        let axis = PriceAxis::default();

        let mut combined = Buffer::empty(Rect::new(0, 0, 16, 8));
        axis.draw(&context(), &info(&candles), &mut combined);

        let mut layered = Buffer::empty(Rect::new(0, 0, 16, 8));
        axis.draw_grid_lines(&context(), &info(&candles), &mut layered);
        axis.draw_labels(&context(), &info(&candles), &mut layered);

        assert_eq!(combined, layered);
    }

    #[test]
    fn grid_pass_alone_has_no_labels() {
        let candles = vec![Candle::new(0, 120.0, 200.0, 100.0, 180.0).unwrap()];
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 8));

        PriceAxis::default().draw_grid_lines(&context(), &info(&candles), &mut buf);

        assert_buffer_eq!(
            buf,
            Buffer::with_lines(vec![
                "          │┈    ",
                "          │     ",
                "          │     ",
                "          │     ",
                "          │┈    ",
                "          │     ",
                "          │     ",
                "          │     ",
            ])
        );
    }

    #[test]
    fn empty_range_keeps_static_chrome_only() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 8));

        PriceAxis::default().draw(&context(), &info(&[]), &mut buf);

        assert_buffer_eq!(
            buf,
            Buffer::with_lines(vec![
                "          │     ",
                "          │     ",
                "          │     ",
                "          │     ",
                "          │     ",
                "          │     ",
                "          │     ",
                "          │     ",
            ])
        );
    }
}
