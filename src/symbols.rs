pub(crate) const UNICODE_VOID: &str = " ";

pub(crate) const UNICODE_BODY: &str = "┃";
pub(crate) const UNICODE_HALF_BODY_BOTTOM: &str = "╻";
pub(crate) const UNICODE_HALF_BODY_TOP: &str = "╹";

pub(crate) const UNICODE_WICK: &str = "│";
pub(crate) const UNICODE_HALF_WICK_BOTTOM: &str = "╷";
pub(crate) const UNICODE_HALF_WICK_TOP: &str = "╵";

// body/wick transitions
pub(crate) const UNICODE_UP: &str = "╽";
pub(crate) const UNICODE_DOWN: &str = "╿";

pub(crate) const AXIS_BORDER: char = '│';
pub(crate) const AXIS_DASH: char = '┈';
pub(crate) const AXIS_RULE: char = '─';
pub(crate) const AXIS_TICK: char = '┴';
