//! Section rule definitions.
//!
//! A [`SectionRule`] claims entries for its section with a filter, optionally
//! rewrites them, and optionally orders the entries of each block.

use std::cmp::Ordering;
use std::fmt;

use crate::syntax::{Block, Entry};

/// Decides whether an entry, currently under the named section, belongs to a rule.
pub type Filter = Box<dyn Fn(&str, &Entry) -> bool + Send + Sync>;

/// Rewrites an entry placed under a rule's section.
pub type Transform = Box<dyn Fn(Entry) -> Entry + Send + Sync>;

/// Orders entries within a block.
pub type Compare = Box<dyn Fn(&Entry, &Entry) -> Ordering + Send + Sync>;

/// Restructures a section's blocks after sorting.
pub type Reblock = fn(Vec<Block>) -> Vec<Block>;

/// A rule for one destination section.
pub struct SectionRule {
    /// Section name the rule routes entries to.
    pub header: String,
    filter: Filter,
    transform: Option<Transform>,
    compare: Option<Compare>,
    reblock: Option<Reblock>,
}

impl SectionRule {
    /// Create a rule that routes entries accepted by `filter` to `header`.
    #[must_use]
    pub fn new(
        header: impl Into<String>,
        filter: impl Fn(&str, &Entry) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            filter: Box::new(filter),
            transform: None,
            compare: None,
            reblock: None,
        }
    }

    /// Set the transform applied to entries placed under this section.
    #[must_use]
    pub fn with_transform(
        mut self,
        transform: impl Fn(Entry) -> Entry + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Set the per-block sort order.
    #[must_use]
    pub fn with_compare(
        mut self,
        compare: impl Fn(&Entry, &Entry) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.compare = Some(Box::new(compare));
        self
    }

    /// Set the block restructuring step.
    #[must_use]
    pub fn with_reblock(mut self, reblock: Reblock) -> Self {
        self.reblock = Some(reblock);
        self
    }

    /// Whether this rule claims the entry.
    #[must_use]
    pub fn accepts(&self, original_header: &str, entry: &Entry) -> bool {
        (self.filter)(original_header, entry)
    }

    /// Apply the transform, if any.
    #[must_use]
    pub fn apply(&self, entry: Entry) -> Entry {
        match &self.transform {
            Some(transform) => transform(entry),
            None => entry,
        }
    }

    /// Stable-sort each block independently, if the rule has an order.
    pub fn sort_blocks(&self, blocks: &mut [Block]) {
        if let Some(compare) = &self.compare {
            for block in blocks {
                block.entries.sort_by(|l, r| compare(l, r));
            }
        }
    }

    /// Apply the block restructuring step, if any.
    #[must_use]
    pub fn reblock(&self, blocks: Vec<Block>) -> Vec<Block> {
        match self.reblock {
            Some(reblock) => reblock(blocks),
            None => blocks,
        }
    }
}

impl fmt::Debug for SectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRule")
            .field("header", &self.header)
            .field("transform", &self.transform.is_some())
            .field("compare", &self.compare.is_some())
            .field("reblock", &self.reblock.is_some())
            .finish_non_exhaustive()
    }
}
