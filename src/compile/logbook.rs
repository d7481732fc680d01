//! Splitting the logbook by completion week.

use crate::syntax::{Block, Entry};

/// Split the first block by the week its entries were completed in.
///
/// Only the first block is touched, and only split in two: entries completed
/// after the earliest week present, then entries completed in that week. The
/// second block therefore spans a single week. Repeated passes converge on
/// one block per week without re-sorting the whole log.
#[must_use]
pub fn block_by_week(mut blocks: Vec<Block>) -> Vec<Block> {
    let Some(first) = blocks.first() else {
        return blocks;
    };
    let Some(earliest) = first.entries.iter().map(Entry::completed_week).min() else {
        return blocks;
    };

    let first = blocks.remove(0);
    let (later, oldest): (Vec<Entry>, Vec<Entry>) = first
        .entries
        .into_iter()
        .partition(|e| e.completed_week() > earliest);

    blocks.insert(0, Block::new(oldest));
    blocks.insert(0, Block::new(later));
    blocks
}
