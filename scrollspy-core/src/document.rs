//! The layout provider the spy reads from and writes highlight state to.
//!
//! Hosts implement this for whatever holds their elements (a DOM binding, a
//! TUI scene, the in-memory [`crate::page::Page`]). Block and link handles are
//! owned by the host; the spy only clones link handles and hands them back.

use crate::geometry::Interval;

pub trait Document {
    /// Handle to a watched content block.
    type Block;
    /// Handle to a navigation link. Cloned into the tracked sequence.
    type Link: Clone;

    /// The identifier links are resolved by. `None` when the block has none.
    fn block_id(&self, block: &Self::Block) -> Option<String>;

    fn offset_top(&self, block: &Self::Block) -> f64;

    fn offset_height(&self, block: &Self::Block) -> f64;

    /// Current scroll position of the scrolling context.
    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn add_state(&mut self, link: &Self::Link, state: &str);

    fn remove_state(&mut self, link: &Self::Link, state: &str);

    /// `[scroll_offset, scroll_offset + viewport_height)`
    fn viewport(&self) -> Interval {
        Interval::viewport(self.scroll_offset(), self.viewport_height())
    }
}
