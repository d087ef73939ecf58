//! Map chains: ordered remapping stages applied left to right

use crate::table::RangeTable;

/// Ordered sequence of range tables.
///
/// Stage position is the only coupling: each stage's output feeds the next
/// stage's input, in declaration order. An empty chain is valid and acts
/// as the identity.
#[derive(Debug, Clone, Default)]
pub struct MapChain {
    tables: Vec<RangeTable>,
}

impl MapChain {
    pub fn new(tables: Vec<RangeTable>) -> Self {
        Self { tables }
    }

    /// Stages in application order.
    pub fn tables(&self) -> &[RangeTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Fold a scalar through every stage in order.
    pub fn translate_scalar(&self, x: u64) -> u64 {
        self.tables.iter().fold(x, |value, table| table.translate(value))
    }
}
