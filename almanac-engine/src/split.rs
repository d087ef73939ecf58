//! Range splitter: widest uniformly-mapped prefix of an interval
//!
//! Splitting is what makes range-at-a-time queries exact: as long as every
//! value of a prefix is governed by the same outcome (one covering row, or
//! the identity gap) the whole prefix can be treated as one unit.

use crate::table::{RangeTable, SubRange};

/// The widest prefix of an interval that one stage maps uniformly.
///
/// When `covering` is `Some`, all `width` leading values are shifted by
/// that row; when `None`, they sit in a gap and pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// The row governing the prefix, or `None` for an identity gap.
    pub covering: Option<&'a SubRange>,
    /// Number of leading values with that single outcome. Never zero.
    pub width: u64,
}

impl RangeTable {
    /// Widest uniform prefix of `[start, end)` under this stage.
    ///
    /// A value equal to a row's source start belongs to the row; a value
    /// equal to its source end belongs to the gap after it. Callers pass a
    /// non-empty interval (`start < end`); empty seed ranges are rejected
    /// before any splitting happens.
    pub fn split_prefix(&self, start: u64, end: u64) -> Segment<'_> {
        debug_assert!(start < end, "cannot split an empty interval");
        match self.find_covering(start) {
            Some(row) => Segment {
                covering: Some(row),
                width: end.min(row.source_end()) - start,
            },
            None => {
                // truncate the gap at the next row, if one starts before `end`
                let gap_end = self
                    .next_after(start)
                    .map_or(end, |next| end.min(next.source_start()));
                Segment {
                    covering: None,
                    width: gap_end - start,
                }
            }
        }
    }
}
