use chrono::{DateTime, FixedOffset, Offset, Utc};
use itertools::Itertools;
use ratatui::prelude::Buffer;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    symbols::{AXIS_RULE, AXIS_TICK},
    Axis, CandlesInfo, ContextInfo,
};

enum Precision {
    Second,
    Minute,
    Day,
}

/// Candle interval, in seconds.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneSecond = 1,
    OneMinute = 60,
    ThreeMinutes = 180,
    FiveMinutes = 300,
    FifteenMinutes = 900,
    ThirtyMinutes = 1800,
    OneHour = 3600,
    TwoHours = 7200,
    FourHours = 14400,
    SixHours = 21600,
    EightHours = 28800,
    TwelveHours = 43200,
    OneDay = 86400,
    ThreeDays = 259200,
    OneWeek = 604800,
}

impl Interval {
    /// Candles between two labelled ticks.
    fn tick_gap(&self) -> usize {
        match self {
            Interval::OneSecond => 30,
            Interval::OneMinute => 15,
            Interval::ThreeMinutes => 20,
            Interval::FiveMinutes => 12,
            Interval::FifteenMinutes => 8,
            Interval::ThirtyMinutes => 8,
            Interval::OneHour => 12,
            Interval::TwoHours => 12,
            Interval::FourHours => 18,
            Interval::SixHours => 12,
            Interval::EightHours => 9,
            Interval::TwelveHours => 14,
            Interval::OneDay => 30,
            Interval::ThreeDays => 30,
            Interval::OneWeek => 12,
        }
    }

    fn tick_precision(&self) -> Precision {
        match self {
            Interval::OneSecond => Precision::Second,
            Interval::OneMinute
            | Interval::ThreeMinutes
            | Interval::FiveMinutes
            | Interval::FifteenMinutes
            | Interval::ThirtyMinutes
            | Interval::OneHour
            | Interval::TwoHours
            | Interval::FourHours
            | Interval::SixHours
            | Interval::EightHours
            | Interval::TwelveHours => Precision::Minute,
            Interval::OneDay | Interval::ThreeDays | Interval::OneWeek => Precision::Day,
        }
    }
}

/// Horizontal time axis rendered into the bottom band.
///
/// The grid layer is a rule with a `┴` tick at every labelled position; the
/// label layer writes date/time strings centred under the ticks, on the row
/// below the rule. Both layers come from the same pure layout pass, so they
/// line up when drawn independently.
///
/// Label rendering priority:
///
/// 1. second diff      -> HH:MM:SS
/// 2. minute/hour diff -> HH:MM
/// 3. day/month diff   -> mm/dd
/// 4. year diff        -> YYYY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    time_offset: FixedOffset,
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl TimeAxis {
    pub fn new(time_offset: FixedOffset) -> Self {
        Self { time_offset }
    }

    /// Computes the rule row and the label row for a band of `width` cells.
    ///
    /// Tick timestamps are resynthesized from the visible range at the candle
    /// interval, one per cell, trimmed to the rightmost `width` entries.
    fn layout(&self, width: usize, candles: &CandlesInfo<'_>) -> (Vec<char>, Vec<char>) {
        let mut rule = vec![AXIS_RULE; width];
        let mut labels = vec![' '; width];

        let (Some(first), Some(last)) = (
            candles.first_visible_timestamp(),
            candles.last_visible_timestamp(),
        ) else {
            return (rule, labels);
        };

        let interval = candles.interval();
        let step_ms = interval as i64 * 1000;
        let precision = interval.tick_precision();

        let full = (first..=last)
            .step_by(step_ms as usize)
            .filter_map(|t| {
                DateTime::from_timestamp_millis(t)
                    .map(|dt| (t, dt.with_timezone(&self.time_offset)))
            })
            .collect_vec();
        let full_len = full.len();
        let ticks = if full_len > width {
            full.into_iter()
                .skip(full_len - width)
                .take(width)
                .collect_vec()
        } else {
            full
        };
        let count = ticks.len();

        match count as u64 {
            0 => {}
            1 => {
                let now = Utc::now().with_timezone(&self.time_offset);
                let (_, only) = &ticks[0];
                let rendered = abbreviated_label(&now, only, &precision);
                let offset = (count - 1) as isize - (label_width(&rendered) / 2) as isize;
                if splice_label(&mut labels, offset, &rendered, true) {
                    rule[count - 1] = AXIS_TICK;
                }
            }
            2.. => {
                // the newest tick always gets a label, overlap allowed
                {
                    let (_, prev) = &ticks[count - 2];
                    let (_, newest) = &ticks[count - 1];
                    let rendered = abbreviated_label(prev, newest, &precision);
                    let offset = (count - 1) as isize - (label_width(&rendered) / 2) as isize;
                    if splice_label(&mut labels, offset, &rendered, true) {
                        rule[count - 1] = AXIS_TICK;
                    }
                }

                let gap = interval.tick_gap() as i64 * step_ms;
                for (idx, ((_, prev), (timestamp, now))) in
                    ticks.into_iter().tuple_windows().enumerate()
                {
                    if timestamp % gap != 0 {
                        continue;
                    }

                    let rendered = transition_label(&prev, &now);
                    let offset = idx as isize - (label_width(&rendered) / 2) as isize;
                    if splice_label(&mut labels, offset, &format!(" {} ", rendered), false) {
                        rule[idx + 1] = AXIS_TICK;
                    }
                }
            }
        }

        (rule, labels)
    }
}

impl Axis for TimeAxis {
    fn draw(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        self.draw_grid_lines(ctx, candles, buf);
        self.draw_labels(ctx, candles, buf);
    }

    fn draw_grid_lines(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        let band = ctx.time_band();
        if band.width == 0 || band.height == 0 {
            return;
        }

        let (rule, _) = self.layout(band.width as usize, candles);
        for (i, ch) in rule.into_iter().enumerate() {
            buf.get_mut(band.x + i as u16, band.y).set_char(ch);
        }
    }

    fn draw_labels(&self, ctx: &ContextInfo, candles: &CandlesInfo<'_>, buf: &mut Buffer) {
        let band = ctx.time_band();
        if band.width == 0 || band.height < 2 {
            return;
        }

        let (_, labels) = self.layout(band.width as usize, candles);
        for (i, ch) in labels.into_iter().enumerate() {
            buf.get_mut(band.x + i as u16, band.y + 1).set_char(ch);
        }
    }
}

/// Label for the newest tick, shortened against `prev` so it only spells out
/// the parts that changed since the previous tick.
fn abbreviated_label(
    prev: &DateTime<FixedOffset>,
    now: &DateTime<FixedOffset>,
    precision: &Precision,
) -> String {
    if prev.format("%Y").to_string() != now.format("%Y").to_string() {
        return match precision {
            Precision::Second => now.format("%Y/%m/%d %H:%M:%S"),
            Precision::Minute => now.format("%Y/%m/%d %H:%M"),
            Precision::Day => now.format("%Y/%m/%d"),
        }
        .to_string();
    }

    if prev.format("%m/%d").to_string() != now.format("%m/%d").to_string() {
        return match precision {
            Precision::Second => now.format("%m/%d %H:%M:%S"),
            Precision::Minute => now.format("%m/%d %H:%M"),
            Precision::Day => now.format("%m/%d"),
        }
        .to_string();
    }

    if prev.format("%H:%M:%S").to_string() != now.format("%H:%M:%S").to_string() {
        return match precision {
            Precision::Second => now.format("%H:%M:%S"),
            Precision::Minute => now.format("%H:%M"),
            Precision::Day => now.format("%m/%d"),
        }
        .to_string();
    }

    String::default()
}

/// Label for an interior tick: the coarsest date/time component that changed
/// between the two neighbouring ticks.
fn transition_label(prev: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>) -> String {
    if prev.format("%Y").to_string() != now.format("%Y").to_string() {
        return now.format("%Y").to_string();
    }

    if prev.format("%m/%d").to_string() != now.format("%m/%d").to_string() {
        return now.format("%m/%d").to_string();
    }

    if prev.format("%H:%M").to_string() != now.format("%H:%M").to_string() {
        return now.format("%H:%M").to_string();
    }

    if prev.format("%H:%M:%S").to_string() != now.format("%H:%M:%S").to_string() {
        return now.format("%H:%M:%S").to_string();
    }

    String::default()
}

fn label_width(value: &str) -> usize {
    value.graphemes(true).count()
}

/// Writes `value` into the row at `idx`, clamped to the row bounds. With
/// `overlap` disabled the write is refused when it would touch a non-blank
/// cell.
fn splice_label(chars: &mut Vec<char>, idx: isize, value: &str, overlap: bool) -> bool {
    let len = label_width(value);
    if chars.len() < len {
        return false;
    }

    let idx = if idx < 0 {
        0
    } else if chars.len() < idx as usize + len {
        chars.len() - len
    } else {
        idx as usize
    };

    if !overlap {
        for &ch in &chars[idx..(idx + len)] {
            if ch != ' ' {
                // not allowed to overlap an existing label
                return false;
            }
        }
    }

    chars.splice(idx..(idx + len), value.chars());

    true
}
