//! Cached block positions.
//!
//! The tracked sequence is rebuilt from scratch on every resync. It is never
//! patched in place, so a refresh always sees one consistent snapshot.

use crate::document::Document;
use crate::geometry::Interval;
use crate::options::SpyOptions;

/// A watched block's link and where the block sat at the last resync.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedBlock<L> {
    /// `None` when the block has no id or no link matched it.
    pub link: Option<L>,
    pub interval: Interval,
}

#[derive(Debug, Clone)]
pub struct PositionTracker<L> {
    blocks: Vec<TrackedBlock<L>>,
}

impl<L: Clone> PositionTracker<L> {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Re-read every block's extent and link from the document.
    pub fn resync<D>(&mut self, doc: &D, options: &SpyOptions<D>)
    where
        D: Document<Link = L>,
    {
        let fresh: Vec<TrackedBlock<L>> = options
            .select_blocks(doc)
            .iter()
            .map(|block| {
                let link = doc
                    .block_id(block)
                    .filter(|id| !id.is_empty())
                    .and_then(|id| options.select_link(doc, &id));

                TrackedBlock {
                    link,
                    interval: Interval::from_extent(doc.offset_top(block), doc.offset_height(block)),
                }
            })
            .collect();

        let unlinked = fresh.iter().filter(|b| b.link.is_none()).count();
        tracing::debug!(blocks = fresh.len(), unlinked, "resynced block positions");

        self.blocks = fresh;
    }

    pub fn blocks(&self) -> &[TrackedBlock<L>] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<L: Clone> Default for PositionTracker<L> {
    fn default() -> Self {
        Self::new()
    }
}
