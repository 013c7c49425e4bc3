//! Per-year boundary records.
//!
//! The embedded table is generated offline, one row per year starting at
//! [`BASE_YEAR`](crate::BASE_YEAR). Rows are stored compactly relative to
//! [`TIME_BASE`] and corrected into absolute Unix seconds on demand.

use crate::consts::{TABLE_SIZE, TIME_BASE};

/// A boundary record as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawBoundary {
    /// Seconds from `TIME_BASE` to Jan 1 00:00:00 of the year
    year_start_offset: u32,
    /// Seconds between the Monday that starts the first numbered week and Jan 1
    week_alignment_offset: u32,
    /// Whether the week containing Jan 1 is numbered 1 (true) or 0 (false)
    week_number_bias: bool,
}

impl RawBoundary {
    pub const fn new(year_start_offset: u32, week_alignment_offset: u32, week_number_bias: bool) -> Self {
        Self {
            year_start_offset,
            week_alignment_offset,
            week_number_bias,
        }
    }

    pub const fn year_start_offset(&self) -> u32 {
        self.year_start_offset
    }

    pub const fn week_alignment_offset(&self) -> u32 {
        self.week_alignment_offset
    }

    pub const fn week_number_bias(&self) -> bool {
        self.week_number_bias
    }

    /// Converts the stored offsets into absolute Unix seconds.
    #[inline]
    pub const fn correct(&self) -> Boundary {
        let year_start = TIME_BASE + self.year_start_offset as i64;
        Boundary {
            year_start,
            week_start: year_start - self.week_alignment_offset as i64,
            week_bias: self.week_number_bias as u32,
        }
    }
}

/// A boundary record in absolute Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary {
    /// First instant of the calendar year
    pub year_start: i64,
    /// First instant of the year's first numbered week, never after `year_start`
    pub week_start: i64,
    /// 0 or 1, added to the number of whole weeks since `week_start`
    pub week_bias: u32,
}

const fn raw(year_start_offset: u32, week_alignment_offset: u32, week_number_bias: u8) -> RawBoundary {
    RawBoundary::new(year_start_offset, week_alignment_offset, week_number_bias != 0)
}

/// Years 2024 through 2075.
pub static BOUNDARY_TABLE: [RawBoundary; TABLE_SIZE] = [
    raw(0, 0, 1),
    raw(31_622_400, 172_800, 1),
    raw(63_158_400, 259_200, 1),
    raw(94_694_400, 345_600, 0),
    raw(126_230_400, 432_000, 0),
    raw(157_852_800, 0, 1),
    raw(189_388_800, 86_400, 1),
    raw(220_924_800, 172_800, 1),
    raw(252_460_800, 259_200, 1),
    raw(284_083_200, 432_000, 0),
    raw(315_619_200, 518_400, 0),
    raw(347_155_200, 0, 1),
    raw(378_691_200, 86_400, 1),
    raw(410_313_600, 259_200, 1),
    raw(441_849_600, 345_600, 0),
    raw(473_385_600, 432_000, 0),
    raw(504_921_600, 518_400, 0),
    raw(536_544_000, 86_400, 1),
    raw(568_080_000, 172_800, 1),
    raw(599_616_000, 259_200, 1),
    raw(631_152_000, 345_600, 0),
    raw(662_774_400, 518_400, 0),
    raw(694_310_400, 0, 1),
    raw(725_846_400, 86_400, 1),
    raw(757_382_400, 172_800, 1),
    raw(789_004_800, 345_600, 0),
    raw(820_540_800, 432_000, 0),
    raw(852_076_800, 518_400, 0),
    raw(883_612_800, 0, 1),
    raw(915_235_200, 172_800, 1),
    raw(946_771_200, 259_200, 1),
    raw(978_307_200, 345_600, 0),
    raw(1_009_843_200, 432_000, 0),
    raw(1_041_465_600, 0, 1),
    raw(1_073_001_600, 86_400, 1),
    raw(1_104_537_600, 172_800, 1),
    raw(1_136_073_600, 259_200, 1),
    raw(1_167_696_000, 432_000, 0),
    raw(1_199_232_000, 518_400, 0),
    raw(1_230_768_000, 0, 1),
    raw(1_262_304_000, 86_400, 1),
    raw(1_293_926_400, 259_200, 1),
    raw(1_325_462_400, 345_600, 0),
    raw(1_356_998_400, 432_000, 0),
    raw(1_388_534_400, 518_400, 0),
    raw(1_420_156_800, 86_400, 1),
    raw(1_451_692_800, 172_800, 1),
    raw(1_483_228_800, 259_200, 1),
    raw(1_514_764_800, 345_600, 0),
    raw(1_546_387_200, 518_400, 0),
    raw(1_577_923_200, 0, 1),
    raw(1_609_459_200, 86_400, 1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BASE_YEAR, DAY_SECONDS};
    use chrono::{Datelike, NaiveDate};

    fn jan_first(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn test_correct_first_record() {
        let boundary = BOUNDARY_TABLE[0].correct();
        assert_eq!(boundary.year_start, TIME_BASE);
        assert_eq!(boundary.week_start, TIME_BASE);
        assert_eq!(boundary.week_bias, 1);
    }

    #[test]
    fn test_correct_subtracts_alignment() {
        let raw = RawBoundary::new(1000, 400, false);
        let boundary = raw.correct();
        assert_eq!(boundary.year_start, TIME_BASE + 1000);
        assert_eq!(boundary.week_start, TIME_BASE + 600);
        assert_eq!(boundary.week_bias, 0);
        // the stored record is left untouched
        assert_eq!(raw.year_start_offset(), 1000);
        assert_eq!(raw.week_alignment_offset(), 400);
        assert!(!raw.week_number_bias());
    }

    #[test]
    fn test_table_is_strictly_increasing() {
        for pair in BOUNDARY_TABLE.windows(2) {
            assert!(
                pair[0].correct().year_start < pair[1].correct().year_start,
                "{:?} should start before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_week_start_never_after_year_start() {
        for raw in &BOUNDARY_TABLE {
            let boundary = raw.correct();
            assert!(boundary.week_start <= boundary.year_start);
            assert!(boundary.week_bias <= 1);
        }
    }

    #[test]
    fn test_year_starts_match_calendar() {
        for (index, raw) in BOUNDARY_TABLE.iter().enumerate() {
            let year = i32::try_from(BASE_YEAR).unwrap() + i32::try_from(index).unwrap();
            let expected = jan_first(year).and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
            assert_eq!(raw.correct().year_start, expected, "year {year}");
        }
    }

    #[test]
    fn test_week_alignment_matches_iso_calendar() {
        for (index, raw) in BOUNDARY_TABLE.iter().enumerate() {
            let year = i32::try_from(BASE_YEAR).unwrap() + i32::try_from(index).unwrap();
            let date = jan_first(year);

            let days_since_monday = i64::from(date.weekday().num_days_from_monday());
            assert_eq!(
                i64::from(raw.week_alignment_offset()),
                days_since_monday * DAY_SECONDS,
                "alignment for {year}"
            );

            // Jan 1 in ISO week 1 numbers its week 1, otherwise it sits in week 0
            let in_first_iso_week = date.iso_week().week() == 1;
            assert_eq!(raw.week_number_bias(), in_first_iso_week, "bias for {year}");
        }
    }
}
