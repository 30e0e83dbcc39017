//! In-memory document.
//!
//! A `Page` is a flat list of blocks and links plus one scrolling viewport.
//! It backs the bridge shell and the tests, and can be loaded from JSON:
//!
//! ```json
//! {
//!   "viewport": { "scroll": 0, "height": 600 },
//!   "blocks": [ { "id": "intro", "class": "chapter", "top": 0, "height": 400 } ],
//!   "links":  [ { "target": "intro" } ],
//!   "selectors": { "block_class": "chapter", "state_name": "current" }
//! }
//! ```

pub mod model;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::options::SpyConfig;

pub use model::{PageBlock, PageLink, PageSelectors, ViewportSpec};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid page description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block index {index} out of range ({len} blocks)")]
    BlockOutOfRange { index: usize, len: usize },
}

/// Index of a block in [`Page::blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockRef(pub usize);

/// Index of a link in [`Page::links`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkRef(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Page {
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default)]
    pub selectors: PageSelectors,
}

impl Page {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport: ViewportSpec {
                scroll: 0.0,
                height: viewport_height,
            },
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn push_block(&mut self, block: PageBlock) -> BlockRef {
        self.blocks.push(block);
        BlockRef(self.blocks.len() - 1)
    }

    pub fn push_link(&mut self, link: PageLink) -> LinkRef {
        self.links.push(link);
        LinkRef(self.links.len() - 1)
    }

    /// Blocks carrying `class`, in document order.
    pub fn blocks_with_class(&self, class: &str) -> Vec<BlockRef> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.class == class)
            .map(|(i, _)| BlockRef(i))
            .collect()
    }

    /// First link targeting `id`.
    pub fn link_for(&self, id: &str) -> Option<LinkRef> {
        self.links.iter().position(|l| l.target == id).map(LinkRef)
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.viewport.scroll = offset.max(0.0);
    }

    pub fn resize(&mut self, height: f64) {
        self.viewport.height = height.max(0.0);
    }

    /// Move a block, as a layout change would. Takes effect on the next resync.
    pub fn set_block_extent(&mut self, index: usize, top: f64, height: f64) -> Result<(), PageError> {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(PageError::BlockOutOfRange { index, len })?;
        block.top = top;
        block.height = height;
        Ok(())
    }

    pub fn has_state(&self, link: LinkRef, state: &str) -> bool {
        self.links
            .get(link.0)
            .is_some_and(|l| l.states.contains(state))
    }

    /// Targets of every link currently carrying `state`.
    pub fn active_links(&self, state: &str) -> Vec<&str> {
        self.links
            .iter()
            .filter(|l| l.states.contains(state))
            .map(|l| l.target.as_str())
            .collect()
    }

    /// Spy configuration derived from [`Page::selectors`]: blocks by class,
    /// links by target id.
    pub fn spy_config(&self) -> SpyConfig<Page> {
        let class = self.selectors.block_class.clone();
        let config = SpyConfig::new()
            .block_selector(move |page: &Page| page.blocks_with_class(&class))
            .link_selector(|page: &Page, id: &str| page.link_for(id));

        match &self.selectors.state_name {
            Some(name) => config.state_name(name.clone()),
            None => config,
        }
    }
}

impl Document for Page {
    type Block = BlockRef;
    type Link = LinkRef;

    fn block_id(&self, block: &BlockRef) -> Option<String> {
        self.blocks.get(block.0).and_then(|b| b.id.clone())
    }

    fn offset_top(&self, block: &BlockRef) -> f64 {
        self.blocks.get(block.0).map_or(0.0, |b| b.top)
    }

    fn offset_height(&self, block: &BlockRef) -> f64 {
        self.blocks.get(block.0).map_or(0.0, |b| b.height)
    }

    fn scroll_offset(&self) -> f64 {
        self.viewport.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.height
    }

    fn add_state(&mut self, link: &LinkRef, state: &str) {
        if let Some(l) = self.links.get_mut(link.0) {
            l.states.insert(state.to_string());
        }
    }

    fn remove_state(&mut self, link: &LinkRef, state: &str) {
        if let Some(l) = self.links.get_mut(link.0) {
            l.states.remove(state);
        }
    }
}
