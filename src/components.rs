use crate::consts::{TICK_SECONDS, WEEK_SECONDS};
use crate::prelude::*;
use crate::resolver::Resolved;

/// Names a position within a datetag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Component {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "tick")]
    Tick,
}

/// The three integers a datetag is made of, before digit encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagComponents {
    /// Years since the base year
    pub year: u32,
    /// Week number including the year's bias
    pub week: u32,
    /// 52nd of the week, always below 52 for resolved timestamps
    pub tick: u32,
}

impl TagComponents {
    /// Splits the time since the resolved year's first week into weeks and ticks.
    ///
    /// `timestamp` must lie inside the resolved record's interval, which
    /// places it at or after the record's `week_start`.
    pub fn compute(resolved: &Resolved, timestamp: i64) -> Self {
        let elapsed = timestamp - resolved.boundary.week_start;
        debug_assert!(elapsed >= 0, "timestamp {timestamp} precedes its week start");

        let week_index = elapsed.div_euclid(WEEK_SECONDS);
        let tick_index = elapsed.rem_euclid(WEEK_SECONDS) / TICK_SECONDS;

        Self {
            year: u32::try_from(resolved.index).unwrap_or(u32::MAX),
            week: resolved.boundary.week_bias.saturating_add(saturate_signed(week_index)),
            tick: saturate_signed(tick_index),
        }
    }

    /// Components in tag order: year, week, tick.
    pub const fn iter(&self) -> [(Component, u32); 3] {
        [
            (Component::Year, self.year),
            (Component::Week, self.week),
            (Component::Tick, self.tick),
        ]
    }
}

// Out-of-range values only need to stay out of range; the encoder rejects them.
fn saturate_signed(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
