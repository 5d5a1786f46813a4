use std::cmp::{max, min};

use ordered_float::OrderedFloat;

use crate::{symbols::*, Float, PriceScale};

pub(crate) enum CandleType {
    Bearish,
    Bullish,
}

/// One OHLC candle. Timestamps are unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candle {
    pub(crate) timestamp: i64,
    pub(crate) open: Float,
    pub(crate) high: Float,
    pub(crate) low: Float,
    pub(crate) close: Float,
}

impl Candle {
    /// Returns `None` when `high < low`.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Option<Self> {
        if high >= low {
            Some(Self {
                timestamp,
                open: OrderedFloat::from(open),
                high: OrderedFloat::from(high),
                low: OrderedFloat::from(low),
                close: OrderedFloat::from(close),
            })
        } else {
            None
        }
    }

    /// Renders the candle as one glyph per chart row, top row first.
    ///
    /// Rows are resolved against `scale`; sub-cell positions of the body
    /// edges and wick tips select between full, half and transition glyphs.
    pub(crate) fn render(&self, scale: &PriceScale) -> (CandleType, Vec<&str>) {
        let open = scale.calc_y(self.open);
        let close = scale.calc_y(self.close);

        let body_top = *max(open, close);
        let body_bottom = *min(open, close);
        let high = *scale.calc_y(self.high);
        let low = *scale.calc_y(self.low);

        let upper_wick = high - body_top;
        let lower_wick = body_bottom - low;
        debug_assert!(upper_wick >= 0.);
        debug_assert!(lower_wick >= 0.);

        let mut in_body = false;
        let mut column = Vec::new();
        for row in (0..scale.height()).rev() {
            let row = row as f64;

            let glyph = if high.ceil() >= row && row >= body_top.floor() {
                // upper wick zone, possibly mixed with the body top
                if high - row > 0.5 {
                    if upper_wick < 0.25 {
                        in_body = true;
                        UNICODE_BODY
                    } else if upper_wick < 0.75 {
                        if in_body {
                            UNICODE_BODY
                        } else {
                            in_body = true;
                            UNICODE_UP
                        }
                    } else {
                        UNICODE_WICK
                    }
                } else if high - row >= 0. {
                    if upper_wick < 0.25 {
                        UNICODE_HALF_BODY_BOTTOM
                    } else {
                        UNICODE_HALF_WICK_BOTTOM
                    }
                } else {
                    UNICODE_VOID
                }
            } else if body_top.floor() >= row && row >= body_bottom.ceil() {
                in_body = true;
                UNICODE_BODY
            } else if body_bottom.ceil() >= row && row >= low.floor() {
                // lower wick zone, possibly mixed with the body bottom
                if low - row < 0.5 {
                    if lower_wick < 0.25 {
                        in_body = true;
                        UNICODE_BODY
                    } else if lower_wick < 0.75 {
                        if in_body {
                            in_body = false;
                            UNICODE_DOWN
                        } else {
                            UNICODE_WICK
                        }
                    } else {
                        UNICODE_WICK
                    }
                } else if low - row <= 1.0 {
                    if lower_wick < 0.25 {
                        UNICODE_HALF_BODY_TOP
                    } else {
                        UNICODE_HALF_WICK_TOP
                    }
                } else {
                    UNICODE_VOID
                }
            } else {
                UNICODE_VOID
            };

            column.push(glyph);
        }

        #[cfg(debug_assertions)]
        if !column_is_continuous(column.clone()) {
            tracing::error!("rendered candle column has gaps, please report this");
        }

        let candle_type = if open <= close {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        };

        (candle_type, column)
    }
}

/// A well-formed column is one unbroken run of non-void glyphs whose
/// half and transition glyphs meet edge-to-edge.
#[cfg(debug_assertions)]
fn column_is_continuous(mut glyphs: Vec<&str>) -> bool {
    use itertools::Itertools;

    if glyphs.iter().all(|&g| g == UNICODE_VOID) {
        return false;
    }

    if glyphs.len() <= 1 {
        return true;
    }

    glyphs.push(UNICODE_VOID);

    {
        let mut runs = 0;
        for (a, b) in glyphs.clone().into_iter().tuple_windows() {
            if a != UNICODE_VOID && b == UNICODE_VOID {
                runs += 1;
            }
        }

        if runs > 1 {
            return false;
        }
    }

    for (a, b) in glyphs.clone().into_iter().tuple_windows() {
        match (a, b) {
            (UNICODE_VOID, _) => {}
            (_, UNICODE_VOID) => {}
            (UNICODE_BODY, UNICODE_UP | UNICODE_HALF_BODY_BOTTOM | UNICODE_HALF_WICK_BOTTOM) => {
                return false
            }
            (UNICODE_DOWN | UNICODE_HALF_BODY_TOP | UNICODE_HALF_WICK_TOP, UNICODE_BODY) => {
                return false
            }
            (UNICODE_WICK, UNICODE_HALF_BODY_BOTTOM | UNICODE_HALF_WICK_BOTTOM) => return false,
            (UNICODE_HALF_BODY_TOP | UNICODE_HALF_WICK_TOP, UNICODE_WICK) => return false,
            _ => {}
        }
    }

    true
}
