//! Ordered composition of blocks, emitted once per tick

use crate::block::Block;
use barline_types::BlockAttributes;
use log::warn;
use std::collections::HashSet;
use std::time::Instant;

/// The fixed, ordered set of blocks rendered left to right in the bar
#[derive(Debug)]
pub struct StatusLine {
    blocks: Vec<Block>,
}

impl StatusLine {
    pub fn new(blocks: Vec<Block>) -> Self {
        {
            let mut seen = HashSet::with_capacity(blocks.len());
            for block in &blocks {
                if !seen.insert(block.name()) {
                    warn!(
                        "Duplicate block name '{}'; click events cannot tell them apart",
                        block.name()
                    );
                }
            }
        }
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Collect every block's attributes in construction order, refreshing
    /// the blocks that are due at `now`.
    pub fn emit_at(&mut self, now: Instant) -> Vec<&BlockAttributes> {
        self.blocks
            .iter_mut()
            .map(|block| block.attributes_at(now))
            .collect()
    }

    pub fn emit(&mut self) -> Vec<&BlockAttributes> {
        self.emit_at(Instant::now())
    }
}
