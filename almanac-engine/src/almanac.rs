//! Almanac parsing: the seeds line plus ordered map blocks

use crate::chain::MapChain;
use crate::error::ParseError;
use crate::pipeline::SeedRange;
use crate::table::{RangeTable, SubRange};
use anyhow::{Context, anyhow};
use itertools::Itertools;

/// Parsed input: the initial seed values plus the ordered map stages.
///
/// The text format is two sections. First a `seeds:` line of
/// whitespace-separated integers, then any number of map blocks separated
/// by blank lines, each a `<from>-to-<to> map:` header followed by rows of
/// three integers `destination source length`.
#[derive(Debug, Clone)]
pub struct Almanac {
    seeds: Vec<u64>,
    chain: MapChain,
}

impl Almanac {
    /// Parse an almanac from its text form.
    ///
    /// Any structural problem is fatal: a malformed row, a bad number, a
    /// header without a `-to-` name, or a block with no rows. Errors carry
    /// the 1-based line number where parsing stopped.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines().enumerate().peekable();

        let (seeds_idx, seeds_line) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty input".to_string()))?;
        let seeds = parse_seeds_line(seeds_line)
            .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", seeds_idx + 1, e)))?;
        if seeds.is_empty() {
            return Err(ParseError::MissingData(
                "seeds line declares no values".to_string(),
            ));
        }

        let mut tables = Vec::new();
        while let Some((header_idx, line)) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            let name = parse_block_header(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", header_idx + 1, e))
            })?;

            let mut rows = Vec::new();
            while let Some((row_idx, row)) = lines.next_if(|(_, l)| !l.trim().is_empty()) {
                let row = parse_row(row).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", row_idx + 1, e))
                })?;
                rows.push(row);
            }
            if rows.is_empty() {
                return Err(ParseError::MissingData(format!("{name} block has no rows")));
            }
            tables.push(RangeTable::new(name, rows)?);
        }

        Ok(Self {
            seeds,
            chain: MapChain::new(tables),
        })
    }

    /// The seeds line read as individual candidate values.
    pub fn seed_values(&self) -> &[u64] {
        &self.seeds
    }

    /// The seeds line read as consecutive `(start, length)` pairs.
    ///
    /// An odd number of values cannot be paired and is a format error.
    pub fn seed_ranges(&self) -> Result<Vec<SeedRange>, ParseError> {
        if self.seeds.len() % 2 != 0 {
            return Err(ParseError::InvalidFormat(format!(
                "seed ranges need an even number of values, got {}",
                self.seeds.len()
            )));
        }
        self.seeds
            .iter()
            .copied()
            .tuples()
            .map(|(start, length)| SeedRange::new(start, length))
            .collect()
    }

    /// The map stages in declaration order.
    pub fn chain(&self) -> &MapChain {
        &self.chain
    }
}

fn parse_seeds_line(line: &str) -> anyhow::Result<Vec<u64>> {
    let values = line
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("expected a line starting with 'seeds:'"))?;
    values
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("bad seed value {token:?}"))
        })
        .collect()
}

fn parse_block_header(line: &str) -> anyhow::Result<String> {
    let name = line
        .trim()
        .strip_suffix("map:")
        .map(str::trim_end)
        .filter(|name| name.contains("-to-"))
        .ok_or_else(|| anyhow!("expected a '<from>-to-<to> map:' header, got {line:?}"))?;
    Ok(name.to_string())
}

fn parse_row(line: &str) -> anyhow::Result<SubRange> {
    let (dest, src, len) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected three numbers per map row, got {line:?}"))?;
    let number = |token: &str| {
        token
            .parse::<u64>()
            .with_context(|| format!("bad number {token:?} in map row"))
    };
    Ok(SubRange::new(number(dest)?, number(src)?, number(len)?)?)
}
