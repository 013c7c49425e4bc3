use crate::consts::{BASE_YEAR, UNIX_YEAR, YEAR_SECONDS};
use crate::table::{BOUNDARY_TABLE, Boundary, RawBoundary};

/// A read-only view over an ordered sequence of boundary records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTable<'a> {
    records: &'a [RawBoundary],
}

/// The record whose year interval contains a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Position of the record in the table, also the year index of the tag
    pub index: usize,
    pub boundary: Boundary,
}

impl BoundaryTable<'static> {
    /// The compiled-in table covering 2024 through 2075.
    pub fn embedded() -> Self {
        Self::new(&BOUNDARY_TABLE)
    }
}

impl Default for BoundaryTable<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'a> BoundaryTable<'a> {
    /// Wraps `records`, which must be ordered by increasing year start.
    pub const fn new(records: &'a [RawBoundary]) -> Self {
        Self { records }
    }

    pub const fn len(&self) -> usize {
        self.records.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the corrected record at `index`, if any.
    pub fn boundary(&self, index: usize) -> Option<Boundary> {
        self.records.get(index).map(RawBoundary::correct)
    }

    /// First index the forward scan looks at.
    ///
    /// The fixed year length is longer than any calendar year, so the estimate
    /// lands on or before the containing record for every covered timestamp.
    /// It may be negative for timestamps before the base year.
    pub const fn estimate_index(timestamp: i64) -> i64 {
        UNIX_YEAR + timestamp / YEAR_SECONDS - BASE_YEAR
    }

    /// Locates the record whose year interval contains `timestamp`.
    ///
    /// Scans forward from [`Self::estimate_index`] and never backwards. Every
    /// record but the last is bounded by its successor's year start; the last
    /// record covers exactly `YEAR_SECONDS` from its own year start.
    /// Returns `None` when the timestamp lies outside the table.
    pub fn resolve(&self, timestamp: i64) -> Option<Resolved> {
        let last = self.len().checked_sub(1)?;
        let mut index = usize::try_from(Self::estimate_index(timestamp).max(0)).ok()?;
        if index > last {
            return None;
        }

        while index < last {
            let current = self.boundary(index)?;
            let next = self.boundary(index + 1)?;
            if current.year_start <= timestamp && timestamp < next.year_start {
                return Some(Resolved {
                    index,
                    boundary: current,
                });
            }
            index += 1;
        }

        let boundary = self.boundary(last)?;
        let end = boundary.year_start.checked_add(YEAR_SECONDS)?;
        (boundary.year_start <= timestamp && timestamp < end).then_some(Resolved {
            index: last,
            boundary,
        })
    }
}
