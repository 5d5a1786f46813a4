use std::ops::Range;

use crate::{Candle, Interval, PriceScale};

/// Read-only view of the candle dataset for one draw call.
///
/// Carries the full dataset, the index range currently on screen and the
/// price scale the compositor derived for that range. Axes borrow it for the
/// duration of a single draw operation and never keep it around.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlesInfo<'a> {
    candles: &'a [Candle],
    visible: Range<usize>,
    price_scale: PriceScale,
    interval: Interval,
}

impl<'a> CandlesInfo<'a> {
    pub fn new(
        candles: &'a [Candle],
        visible: Range<usize>,
        price_scale: PriceScale,
        interval: Interval,
    ) -> Self {
        // a range reaching past the dataset renders as empty instead of panicking
        let end = visible.end.min(candles.len());
        let start = visible.start.min(end);

        Self {
            candles,
            visible: start..end,
            price_scale,
            interval,
        }
    }

    pub fn candles(&self) -> &'a [Candle] {
        self.candles
    }

    pub fn visible(&self) -> Range<usize> {
        self.visible.clone()
    }

    pub fn visible_candles(&self) -> &'a [Candle] {
        &self.candles[self.visible.clone()]
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn price_scale(&self) -> PriceScale {
        self.price_scale
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn first_visible_timestamp(&self) -> Option<i64> {
        self.visible_candles().first().map(|c| c.timestamp)
    }

    pub fn last_visible_timestamp(&self) -> Option<i64> {
        self.visible_candles().last().map(|c| c.timestamp)
    }
}
