use chrono::{FixedOffset, Offset, Utc};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style, Styled},
    widgets::Widget,
};

use crate::{
    candle::CandleType, Axis, Candle, CandlesInfo, ContextInfo, Interval, Numeric, PriceAxis,
    PriceScale, TimeAxis,
};

/// Rule row plus label row.
const TIME_BAND_HEIGHT: u16 = 2;

/// Candlestick chart widget and axis compositor.
///
/// Renders a frame in three layers: axis grid lines first, then the visible
/// candles, then axis labels, so grid lines sit behind the candles and labels
/// stay legible above them. Axes are `dyn Axis` trait objects; when none are
/// registered explicitly, a [`PriceAxis`] and a [`TimeAxis`] are used.
pub struct CandleStickChart {
    /// Widget style
    style: Style,
    /// Candle data
    candles: Vec<Candle>,
    /// Candle interval
    interval: Interval,
    /// Timezone used for time labels
    time_offset: FixedOffset,
    /// Price label format
    numeric: Numeric,
    bullish_color: Color,
    bearish_color: Color,
    /// Axes to compose; empty means the default price/time pair
    axes: Vec<Box<dyn Axis>>,
}

impl CandleStickChart {
    pub fn new(interval: Interval) -> Self {
        Self {
            style: Style::default(),
            candles: Vec::new(),
            interval,
            time_offset: Utc.fix(),
            numeric: Numeric::default(),
            bullish_color: Color::Green,
            bearish_color: Color::Red,
            axes: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn candles(mut self, candles: Vec<Candle>) -> Self {
        self.candles = candles;
        self
    }

    pub fn time_offset(mut self, time_offset: FixedOffset) -> Self {
        self.time_offset = time_offset;
        self
    }

    pub fn numeric(mut self, numeric: Numeric) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn bullish_color(mut self, color: Color) -> Self {
        self.bullish_color = color;
        self
    }

    pub fn bearish_color(mut self, color: Color) -> Self {
        self.bearish_color = color;
        self
    }

    /// Registers an axis, replacing the default price/time pair.
    pub fn axis(mut self, axis: Box<dyn Axis>) -> Self {
        self.axes.push(axis);
        self
    }
}

impl Styled for CandleStickChart {
    type Item = CandleStickChart;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        self.style(style)
    }
}

impl Widget for CandleStickChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        if self.candles.is_empty() {
            return;
        }

        // the price band is sized for the widest label over the whole dataset
        // so it stays stable while candles scroll through
        let global_min = self.candles.iter().map(|c| c.low).min().unwrap();
        let global_max = self.candles.iter().map(|c| c.high).max().unwrap();
        let price_band_width = self.numeric.band_width(global_min, global_max);
        if area.width <= price_band_width || area.height <= TIME_BAND_HEIGHT {
            return;
        }

        let ctx = ContextInfo::new(area, price_band_width, TIME_BAND_HEIGHT);
        let chart_area = ctx.chart_area();

        let visible = self
            .candles
            .len()
            .saturating_sub(chart_area.width as usize)..self.candles.len();
        let visible_candles = &self.candles[visible.clone()];
        let min = visible_candles.iter().map(|c| c.low).min().unwrap();
        let max = visible_candles.iter().map(|c| c.high).max().unwrap();
        let scale = PriceScale::new(chart_area.height, min, max);
        let info = CandlesInfo::new(&self.candles, visible, scale, self.interval);

        let default_axes: Vec<Box<dyn Axis>>;
        let axes: &[Box<dyn Axis>] = if self.axes.is_empty() {
            default_axes = vec![
                Box::new(PriceAxis::new(self.numeric)),
                Box::new(TimeAxis::new(self.time_offset)),
            ];
            &default_axes
        } else {
            &self.axes
        };

        for axis in axes {
            axis.draw_grid_lines(&ctx, &info, buf);
        }

        for (x, candle) in info.visible_candles().iter().enumerate() {
            let (candle_type, column) = candle.render(&scale);
            let color = match candle_type {
                CandleType::Bullish => self.bullish_color,
                CandleType::Bearish => self.bearish_color,
            };

            for (y, glyph) in column.into_iter().enumerate() {
                buf.get_mut(chart_area.x + x as u16, chart_area.y + y as u16)
                    .set_symbol(glyph)
                    .set_fg(color);
            }
        }

        for axis in axes {
            axis.draw_labels(&ctx, &info, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{
        assert_buffer_eq,
        buffer::Buffer,
        layout::Rect,
        prelude::{Color, Style},
        widgets::Widget,
    };

    use crate::{Axis, Candle, CandleStickChart, CandlesInfo, ContextInfo, Interval};

    fn render(widget: CandleStickChart, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn empty_chart_renders_nothing() {
        let widget = CandleStickChart::new(Interval::OneMinute);
        let buffer = render(widget, 20, 7);
        assert_buffer_eq!(buffer, Buffer::empty(Rect::new(0, 0, 20, 7)));
    }

    #[test]
    fn too_small_area_renders_nothing() {
        let widget = CandleStickChart::new(Interval::OneMinute)
            .candles(vec![Candle::new(1, 0.9, 3.0, 0.0, 2.1).unwrap()]);
        let buffer = render(widget, 10, 3);
        assert_buffer_eq!(buffer, Buffer::empty(Rect::new(0, 0, 10, 3)));
    }

    #[test]
    fn simple_candle_with_default_axes() {
        let widget = CandleStickChart::new(Interval::OneMinute)
            .candles(vec![Candle::new(1703656020000, 0.9, 3.0, 0.0, 2.1).unwrap()]);
        let buffer = render(widget, 20, 7);

        let mut expected = Buffer::with_lines(vec![
            "    3.000 │┈ │      ",
            "          │  │      ",
            "          │  ┃      ",
            "          │  │      ",
            "    0.600 │┈ │      ",
            "             ───────",
            "                    ",
        ]);
        expected.set_style(Rect::new(13, 0, 1, 5), Style::default().fg(Color::Green));
        assert_buffer_eq!(buffer, expected);
    }

    #[test]
    fn registered_axis_replaces_defaults() {
        struct Silent;

        impl Axis for Silent {
            fn draw(&self, _: &ContextInfo, _: &CandlesInfo<'_>, _: &mut Buffer) {}
        }

        let widget = CandleStickChart::new(Interval::OneMinute)
            .candles(vec![Candle::new(1703656020000, 0.9, 3.0, 0.0, 2.1).unwrap()])
            .axis(Box::new(Silent));
        let buffer = render(widget, 20, 7);

        let mut expected = Buffer::with_lines(vec![
            "             │      ",
            "             │      ",
            "             ┃      ",
            "             │      ",
            "             │      ",
            "                    ",
            "                    ",
        ]);
        expected.set_style(Rect::new(13, 0, 1, 5), Style::default().fg(Color::Green));
        assert_buffer_eq!(buffer, expected);
    }

    #[test]
    fn grid_lines_sit_behind_candles_and_labels_above() {
        // a wide chart: the time rule must not overwrite candle rows, and the
        // price labels must survive the candle pass untouched
        let candles: Vec<Candle> = (0..40)
            .map(|i| Candle::new(1_704_006_060_000 + i * 60_000, 1.0, 2.0, 0.5, 1.5).unwrap())
            .collect();
        let widget = CandleStickChart::new(Interval::OneMinute).candles(candles);
        let buffer = render(widget, 30, 10);

        // price band is 13 wide, so 17 of the 40 candles are visible
        assert_eq!(buffer.get(0, 0).symbol, " ");
        assert_eq!(buffer.get(10, 0).symbol, "│");
        assert_eq!(buffer.get(11, 0).symbol, "┈");
        for x in 13..30 {
            assert_ne!(buffer.get(x, 8).symbol, " ", "rule row at x={x}");
        }
    }
}
