use ratatui::prelude::Buffer;

use crate::{CandlesInfo, ContextInfo};

/// Drawing contract shared by every axis variant on the chart.
///
/// The compositor renders a frame in layers: grid lines behind the candles,
/// labels above them. An axis that supports layered rendering overrides
/// [`Axis::draw_grid_lines`] and [`Axis::draw_labels`]; both default to
/// no-ops, so a minimal axis only has to implement [`Axis::draw`] and the
/// compositor can still call all three operations on any `dyn Axis` without
/// probing for support.
///
/// Each operation may be invoked on its own and must produce a coherent
/// rendering without relying on the others having run. Calls are synchronous,
/// stateless and idempotent; implementations must not mutate or retain the
/// inputs. There is no error channel: degenerate inputs (empty visible range,
/// zero-size area) degrade to drawing nothing.
///
/// The paint target is passed as `&mut Buffer` in the style of
/// [`ratatui::widgets::Widget::render`]; `ctx` carries the geometry of the
/// frame and `candles` the dataset and visible range.
pub trait Axis {
    /// Renders the complete axis: grid lines and labels in one pass.
    ///
    /// For an axis that supports layered rendering this must be visually
    /// equivalent to [`Axis::draw_grid_lines`] followed by
    /// [`Axis::draw_labels`] with the same inputs.
    fn draw(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer);

    /// Renders only the background grid and tick lines.
    fn draw_grid_lines(&self, _ctx: &ContextInfo, _candles: &CandlesInfo<'_>, _buf: &mut Buffer) {}

    /// Renders only the foreground text labels.
    fn draw_labels(&self, _ctx: &ContextInfo, _candles: &CandlesInfo<'_>, _buf: &mut Buffer) {}
}
