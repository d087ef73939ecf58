//! Interval pipeline: minimum reachable output over seed ranges

use crate::chain::MapChain;
use crate::error::ParseError;

/// A closed-open interval `[start, start + length)` of candidate seed
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRange {
    start: u64,
    length: u64,
}

impl SeedRange {
    /// Create a seed range.
    ///
    /// A zero-length range is malformed input and rejected, as is a range
    /// whose exclusive end would run past `u64::MAX`.
    pub fn new(start: u64, length: u64) -> Result<Self, ParseError> {
        if length == 0 {
            return Err(ParseError::InvalidFormat(format!(
                "seed range starting at {start} has zero length"
            )));
        }
        if start.checked_add(length).is_none() {
            return Err(ParseError::InvalidFormat(format!(
                "seed range starting at {start} overflows the integer range"
            )));
        }
        Ok(Self { start, length })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> u64 {
        self.start + self.length
    }
}

/// Minimum image of a raw seed list under the chain.
///
/// Returns `None` for an empty seed list.
pub fn minimum_scalar(seeds: &[u64], chain: &MapChain) -> Option<u64> {
    seeds.iter().map(|&seed| chain.translate_scalar(seed)).min()
}

/// Minimum image over whole seed ranges, without enumerating their values.
///
/// Each range is walked boundary to boundary: one pass over the chain
/// finds the widest prefix that every stage maps uniformly, the prefix is
/// folded into the minimum, and the cursor jumps past it. The work is
/// proportional to the number of row boundaries crossed, not to the range
/// lengths, so billion-value ranges cost the same as narrow ones.
///
/// The minimum of a uniform prefix is taken at its left edge. That is
/// only valid because every stage applies one additive offset across the
/// prefix, so the composed transform is non-decreasing on it; a stage
/// that reordered values within a prefix would invalidate this shortcut.
///
/// Returns `None` for an empty range list.
pub fn minimum_output(ranges: &[SeedRange], chain: &MapChain) -> Option<u64> {
    ranges.iter().map(|range| range_minimum(*range, chain)).min()
}

/// Minimum image of a single seed range.
fn range_minimum(range: SeedRange, chain: &MapChain) -> u64 {
    let mut minimum = u64::MAX;
    let mut pos = range.start();
    let mut remaining = range.length();
    while remaining > 0 {
        let (mapped, width) = uniform_step(pos, remaining, chain);
        minimum = minimum.min(mapped);
        // width is never zero, but forward progress must not depend on it
        let skip = width.clamp(1, remaining);
        pos += skip;
        remaining -= skip;
    }
    minimum
}

/// One pass over the chain starting at `pos`: the fully translated left
/// edge and the number of leading values that share its transform through
/// every stage.
fn uniform_step(pos: u64, width: u64, chain: &MapChain) -> (u64, u64) {
    let mut value = pos;
    let mut width = width;
    for table in chain.tables() {
        let segment = table.split_prefix(value, value + width);
        width = segment.width;
        if let Some(row) = segment.covering {
            value = row.image(value);
        }
    }
    (value, width)
}

#[cfg(feature = "parallel")]
mod par {
    use super::{SeedRange, range_minimum};
    use crate::chain::MapChain;
    use rayon::prelude::*;

    /// Parallel [`minimum_scalar`](super::minimum_scalar).
    pub fn par_minimum_scalar(seeds: &[u64], chain: &MapChain) -> Option<u64> {
        seeds
            .par_iter()
            .map(|&seed| chain.translate_scalar(seed))
            .min()
    }

    /// Parallel [`minimum_output`](super::minimum_output).
    ///
    /// Ranges are minimized independently and combined with a global
    /// minimum; the chain is shared immutably across workers.
    pub fn par_minimum_output(ranges: &[SeedRange], chain: &MapChain) -> Option<u64> {
        ranges
            .par_iter()
            .map(|range| range_minimum(*range, chain))
            .min()
    }
}

#[cfg(feature = "parallel")]
pub use par::{par_minimum_output, par_minimum_scalar};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RangeTable, SubRange};

    fn example_chain() -> MapChain {
        MapChain::new(vec![
            RangeTable::new(
                "seed-to-soil",
                vec![
                    SubRange::new(50, 98, 2).unwrap(),
                    SubRange::new(52, 50, 48).unwrap(),
                ],
            )
            .unwrap(),
        ])
    }

    #[test]
    fn zero_length_range_rejected() {
        assert!(matches!(
            SeedRange::new(79, 0),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn overflowing_range_rejected() {
        assert!(SeedRange::new(u64::MAX, 1).is_err());
        assert!(SeedRange::new(u64::MAX - 1, 1).is_ok());
    }

    #[test]
    fn scalar_minimum_of_worked_example() {
        let chain = example_chain();
        // 79 -> 81, 14 -> 14, 55 -> 57, 13 -> 13
        assert_eq!(minimum_scalar(&[79, 14, 55, 13], &chain), Some(13));
    }

    #[test]
    fn empty_inputs_have_no_minimum() {
        let chain = example_chain();
        assert_eq!(minimum_scalar(&[], &chain), None);
        assert_eq!(minimum_output(&[], &chain), None);
    }

    #[test]
    fn range_minimum_matches_brute_force() {
        let chain = example_chain();
        let range = SeedRange::new(79, 14).unwrap();
        let brute = (79..93).map(|x| chain.translate_scalar(x)).min().unwrap();
        assert_eq!(minimum_output(&[range], &chain), Some(brute));
    }

    #[test]
    fn range_straddling_several_rows() {
        let chain = example_chain();
        // covers the gap below 50, both rows, and the gap above 100
        let range = SeedRange::new(40, 70).unwrap();
        let brute = (40..110).map(|x| chain.translate_scalar(x)).min().unwrap();
        assert_eq!(minimum_output(&[range], &chain), Some(brute));
    }

    #[test]
    fn minimum_over_several_ranges() {
        let chain = example_chain();
        let ranges = vec![
            SeedRange::new(79, 14).unwrap(),
            SeedRange::new(55, 13).unwrap(),
        ];
        let brute = (79..93)
            .chain(55..68)
            .map(|x| chain.translate_scalar(x))
            .min()
            .unwrap();
        assert_eq!(minimum_output(&ranges, &chain), Some(brute));
    }

    #[test]
    fn huge_range_terminates_quickly() {
        // the walk is boundary-bounded, so a billion-wide range is cheap
        let chain = example_chain();
        let range = SeedRange::new(0, 1 << 40).unwrap();
        // minimum is 0: everything below 50 is identity mapped
        assert_eq!(minimum_output(&[range], &chain), Some(0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_agrees_with_sequential() {
        let chain = example_chain();
        let ranges = vec![
            SeedRange::new(79, 14).unwrap(),
            SeedRange::new(55, 13).unwrap(),
        ];
        assert_eq!(
            par_minimum_output(&ranges, &chain),
            minimum_output(&ranges, &chain)
        );
        let seeds = [79, 14, 55, 13];
        assert_eq!(
            par_minimum_scalar(&seeds, &chain),
            minimum_scalar(&seeds, &chain)
        );
    }
}
