//! Almanac range-mapping engine
//!
//! Threads integer values through an ordered sequence of piecewise-linear
//! remapping stages and finds the minimum reachable output, either for a
//! plain list of candidate values or for whole ranges of them — without
//! ever enumerating a range's values, so billion-value ranges are cheap.
//!
//! # Overview
//!
//! This library provides:
//! - [`Almanac`]: the parsed input, a `seeds:` line plus ordered map blocks
//! - [`RangeTable`]: one remapping stage, rows looked up by binary search
//! - [`MapChain`]: the stages applied left to right
//! - [`minimum_scalar`] and [`minimum_output`]: the two query modes
//!
//! All structures are immutable after parsing; queries take `&self` and
//! cannot fail. With the `parallel` feature, [`par_minimum_scalar`] and
//! [`par_minimum_output`] fan the same queries out over rayon.
//!
//! # Quick Example
//!
//! ```
//! use almanac_engine::{Almanac, minimum_output, minimum_scalar};
//!
//! let input = "\
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ";
//! let almanac = Almanac::parse(input).unwrap();
//!
//! // each seed value on its own: 79 -> 81, 14 -> 14, 55 -> 57, 13 -> 13
//! let min = minimum_scalar(almanac.seed_values(), almanac.chain());
//! assert_eq!(min, Some(13));
//!
//! // the same line read as (start, length) ranges: the range starting
//! //  at 55 maps wholesale to [57, 70)
//! let ranges = almanac.seed_ranges().unwrap();
//! let min = minimum_output(&ranges, almanac.chain());
//! assert_eq!(min, Some(57));
//! ```

mod almanac;
mod chain;
mod error;
mod pipeline;
mod split;
mod table;

// Re-export public API
pub use almanac::Almanac;
pub use chain::MapChain;
pub use error::ParseError;
#[cfg(feature = "parallel")]
pub use pipeline::{par_minimum_output, par_minimum_scalar};
pub use pipeline::{SeedRange, minimum_output, minimum_scalar};
pub use split::Segment;
pub use table::{RangeTable, SubRange};
