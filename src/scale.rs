use ordered_float::OrderedFloat;

use crate::Float;

/// Maps a price to a fractional row of the chart area, with row 0 at the
/// bottom edge and `height` at the top.
///
/// Degenerate ranges are widened instead of rejected; draw operations have no
/// error channel, so a scale must always be usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    height: u16,
    min: Float,
    max: Float,
    unit: Float,
}

impl PriceScale {
    pub fn new(height: u16, min: Float, max: Float) -> Self {
        let height = height.max(1);
        let max = if max > min {
            max
        } else {
            min + OrderedFloat::from(1.0)
        };
        let unit = (max - min) / OrderedFloat::from(height as f64);

        Self {
            height,
            min,
            max,
            unit,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn min(&self) -> Float {
        self.min
    }

    pub fn max(&self) -> Float {
        self.max
    }

    pub fn calc_y(&self, value: Float) -> Float {
        (value - self.min) / self.unit
    }

    /// Price at the top edge of the given row, counting rows from the top.
    pub fn value_at_row(&self, row: u16) -> Float {
        self.max - self.unit * OrderedFloat::from(row as f64)
    }
}
