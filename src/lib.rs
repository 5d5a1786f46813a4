use ordered_float::OrderedFloat;

mod axis;
mod candle;
mod candles;
mod candlestick_chart;
mod context;
mod price_axis;
mod scale;
mod symbols;
mod time_axis;

pub use axis::Axis;
pub use candle::Candle;
pub use candles::CandlesInfo;
pub use candlestick_chart::CandleStickChart;
pub use context::ContextInfo;
pub use price_axis::{Numeric, PriceAxis};
pub use scale::PriceScale;
pub use time_axis::{Interval, TimeAxis};

pub(crate) type Float = OrderedFloat<f64>;
