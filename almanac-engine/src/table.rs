//! Range tables: one remapping stage of the almanac

use crate::error::ParseError;
use std::cmp::Ordering;

/// One row of a map stage: a source interval and the start of its image.
///
/// The source interval is closed-open: `source_start` belongs to the row,
/// `source_start + length` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRange {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl SubRange {
    /// Create a row from one `destination source length` triple.
    ///
    /// Rejects zero-length rows and rows whose source or destination
    /// interval would run past `u64::MAX`; accepting either would let a
    /// later lookup or interval walk overflow.
    pub fn new(destination_start: u64, source_start: u64, length: u64) -> Result<Self, ParseError> {
        if length == 0 {
            return Err(ParseError::InvalidFormat(format!(
                "zero-length map row at source {source_start}"
            )));
        }
        if source_start.checked_add(length).is_none()
            || destination_start.checked_add(length).is_none()
        {
            return Err(ParseError::InvalidFormat(format!(
                "map row at source {source_start} overflows the integer range"
            )));
        }
        Ok(Self {
            destination_start,
            source_start,
            length,
        })
    }

    /// Start of the image interval.
    pub fn destination_start(&self) -> u64 {
        self.destination_start
    }

    /// First source value covered by this row.
    pub fn source_start(&self) -> u64 {
        self.source_start
    }

    /// Exclusive end of the source interval.
    pub fn source_end(&self) -> u64 {
        self.source_start + self.length
    }

    /// Number of values covered.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Whether `x` falls inside `[source_start, source_end)`.
    pub fn contains(&self, x: u64) -> bool {
        x >= self.source_start && x < self.source_end()
    }

    /// Image of a covered value. Callers guarantee `self.contains(x)`.
    pub(crate) fn image(&self, x: u64) -> u64 {
        debug_assert!(self.contains(x));
        x - self.source_start + self.destination_start
    }
}

/// One remapping stage: rows sorted by source start, pairwise disjoint.
///
/// Values covered by a row are shifted to that row's destination interval;
/// everything else passes through unchanged.
#[derive(Debug, Clone)]
pub struct RangeTable {
    name: String,
    ranges: Vec<SubRange>,
}

impl RangeTable {
    /// Build a stage from its rows, in any order.
    ///
    /// Rows are sorted by source start here, so row order in the input
    /// never affects lookups. Overlapping source intervals cannot be
    /// searched and are rejected.
    pub fn new(name: impl Into<String>, mut ranges: Vec<SubRange>) -> Result<Self, ParseError> {
        let name = name.into();
        ranges.sort_unstable_by_key(|r| r.source_start);
        for pair in ranges.windows(2) {
            if pair[1].source_start < pair[0].source_end() {
                return Err(ParseError::InvalidFormat(format!(
                    "overlapping rows in {name}: sources {} and {}",
                    pair[0].source_start, pair[1].source_start
                )));
            }
        }
        Ok(Self { name, ranges })
    }

    /// Name from the map block header. Diagnostics only; chaining is
    /// positional.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows in ascending source order.
    pub fn sub_ranges(&self) -> &[SubRange] {
        &self.ranges
    }

    /// Binary search for the row whose source interval covers `x`.
    pub fn find_covering(&self, x: u64) -> Option<&SubRange> {
        self.ranges
            .binary_search_by(|r| {
                if x < r.source_start {
                    Ordering::Greater
                } else if x >= r.source_end() {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|i| &self.ranges[i])
    }

    /// Translate one value through this stage; uncovered values pass
    /// through unchanged.
    pub fn translate(&self, x: u64) -> u64 {
        self.find_covering(x).map_or(x, |r| r.image(x))
    }

    /// First row starting strictly after `x`, if any.
    pub(crate) fn next_after(&self, x: u64) -> Option<&SubRange> {
        let idx = self.ranges.partition_point(|r| r.source_start <= x);
        self.ranges.get(idx)
    }
}
