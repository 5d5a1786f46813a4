use ratatui::prelude::Rect;

/// Immutable chart geometry for one draw call.
///
/// Built by the compositor once per frame and handed to every axis. The whole
/// widget area is split into three parts: a left band reserved for the price
/// axis, a bottom band reserved for the time axis and the chart area in
/// between, where the candles are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextInfo {
    area: Rect,
    price_band_width: u16,
    time_band_height: u16,
}

impl ContextInfo {
    pub fn new(area: Rect, price_band_width: u16, time_band_height: u16) -> Self {
        // clamp the bands so every derived rect stays inside `area`
        let price_band_width = price_band_width.min(area.width);
        let time_band_height = time_band_height.min(area.height);

        Self {
            area,
            price_band_width,
            time_band_height,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Columns and rows occupied by the candle layer.
    pub fn chart_area(&self) -> Rect {
        Rect::new(
            self.area.x + self.price_band_width,
            self.area.y,
            self.area.width - self.price_band_width,
            self.area.height - self.time_band_height,
        )
    }

    /// Left band reserved for price grid lines and labels.
    pub fn price_band(&self) -> Rect {
        Rect::new(
            self.area.x,
            self.area.y,
            self.price_band_width,
            self.area.height - self.time_band_height,
        )
    }

    /// Bottom band reserved for the time rule, ticks and labels. Aligned with
    /// the chart columns so ticks sit under the candles they mark.
    pub fn time_band(&self) -> Rect {
        Rect::new(
            self.area.x + self.price_band_width,
            self.area.y + self.area.height - self.time_band_height,
            self.area.width - self.price_band_width,
            self.time_band_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use ratatui::prelude::Rect;

    use crate::ContextInfo;

    #[test]
    fn test_band_split() {
        let ctx = ContextInfo::new(Rect::new(0, 0, 80, 24), 13, 2);
        assert_eq!(ctx.chart_area(), Rect::new(13, 0, 67, 22));
        assert_eq!(ctx.price_band(), Rect::new(0, 0, 13, 22));
        assert_eq!(ctx.time_band(), Rect::new(13, 22, 67, 2));
    }

    #[test]
    fn test_oversized_bands_are_clamped() {
        let ctx = ContextInfo::new(Rect::new(0, 0, 10, 4), 30, 9);
        assert_eq!(ctx.chart_area().width, 0);
        assert_eq!(ctx.chart_area().height, 0);
        assert_eq!(ctx.price_band().width, 10);
        assert_eq!(ctx.time_band().height, 4);
    }
}
