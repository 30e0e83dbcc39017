//! Spy configuration.
//!
//! Callers describe *what* to watch with injected rules and may override
//! *how* links are highlighted. [`SpyConfig`] is the partial, caller-facing
//! form; [`SpyOptions`] is the validated result the spy runs with.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::document::Document;

/// Default highlight state toggled on links.
pub const DEFAULT_STATE_NAME: &str = "active";

/// Enumerates the watched blocks in document order.
pub type BlockRule<D> = Arc<dyn Fn(&D) -> Vec<<D as Document>::Block> + Send + Sync>;

/// Resolves the link for a block identifier.
pub type LinkRule<D> = Arc<dyn Fn(&D, &str) -> Option<<D as Document>::Link> + Send + Sync>;

/// Produces the state name to toggle.
pub type StateNameRule = Arc<dyn Fn() -> String + Send + Sync>;

/// The highlight state, either fixed or asked for before every toggle.
#[derive(Clone)]
pub enum StateName {
    Fixed(String),
    /// Never called at build time, only right before each toggle.
    Dynamic(StateNameRule),
}

impl StateName {
    pub fn resolve(&self) -> String {
        match self {
            StateName::Fixed(name) => name.clone(),
            StateName::Dynamic(rule) => rule(),
        }
    }
}

impl fmt::Debug for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateName::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            StateName::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Applies (`true`) or clears (`false`) the named state on a link.
pub type ToggleFn<D> = Arc<dyn Fn(&mut D, &<D as Document>::Link, bool, &str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no block selector configured; the spy has nothing to watch")]
    MissingBlockSelector,
    #[error("no link selector configured; blocks cannot be mapped to links")]
    MissingLinkSelector,
    #[error("state name must not be empty")]
    EmptyStateName,
}

/// Adds the state when the block is in view, removes it otherwise.
pub fn default_toggle<D: Document>(doc: &mut D, link: &D::Link, is_in_view: bool, state: &str) {
    if is_in_view {
        doc.add_state(link, state);
    } else {
        doc.remove_state(link, state);
    }
}

/// Partial configuration. Unset keys fall back to [`SpyConfig::defaults`].
pub struct SpyConfig<D: Document> {
    pub block_selector: Option<BlockRule<D>>,
    pub link_selector: Option<LinkRule<D>>,
    pub state_name: Option<StateName>,
    pub toggle: Option<ToggleFn<D>>,
}

impl<D: Document> SpyConfig<D> {
    /// Nothing set.
    pub fn new() -> Self {
        Self {
            block_selector: None,
            link_selector: None,
            state_name: None,
            toggle: None,
        }
    }

    /// The built-in defaults. Block and link selection have none.
    pub fn defaults() -> Self
    where
        D: 'static,
    {
        Self {
            block_selector: None,
            link_selector: None,
            state_name: Some(StateName::Fixed(DEFAULT_STATE_NAME.to_string())),
            toggle: Some(Arc::new(default_toggle::<D>)),
        }
    }

    pub fn block_selector<F>(mut self, rule: F) -> Self
    where
        F: Fn(&D) -> Vec<D::Block> + Send + Sync + 'static,
    {
        self.block_selector = Some(Arc::new(rule));
        self
    }

    pub fn link_selector<F>(mut self, rule: F) -> Self
    where
        F: Fn(&D, &str) -> Option<D::Link> + Send + Sync + 'static,
    {
        self.link_selector = Some(Arc::new(rule));
        self
    }

    /// Fixed state name.
    pub fn state_name(mut self, name: impl Into<String>) -> Self {
        self.state_name = Some(StateName::Fixed(name.into()));
        self
    }

    /// State name computed right before every toggle call.
    pub fn state_name_with<F>(mut self, rule: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.state_name = Some(StateName::Dynamic(Arc::new(rule)));
        self
    }

    pub fn toggle<F>(mut self, toggle: F) -> Self
    where
        F: Fn(&mut D, &D::Link, bool, &str) + Send + Sync + 'static,
    {
        self.toggle = Some(Arc::new(toggle));
        self
    }

    /// Key-wise override: every key set on `self` wins, the rest come from
    /// `base`.
    pub fn merge(self, base: SpyConfig<D>) -> Self {
        Self {
            block_selector: self.block_selector.or(base.block_selector),
            link_selector: self.link_selector.or(base.link_selector),
            state_name: self.state_name.or(base.state_name),
            toggle: self.toggle.or(base.toggle),
        }
    }

    /// Merge over the defaults and validate.
    pub fn build(self) -> Result<SpyOptions<D>, ConfigError>
    where
        D: 'static,
    {
        let merged = self.merge(Self::defaults());

        let block_selector = merged
            .block_selector
            .ok_or(ConfigError::MissingBlockSelector)?;
        let link_selector = merged
            .link_selector
            .ok_or(ConfigError::MissingLinkSelector)?;
        let state_name = merged
            .state_name
            .unwrap_or_else(|| StateName::Fixed(DEFAULT_STATE_NAME.to_string()));
        let toggle = merged.toggle.unwrap_or_else(|| Arc::new(default_toggle::<D>));

        // Dynamic rules are left untouched until the first toggle.
        if matches!(&state_name, StateName::Fixed(name) if name.is_empty()) {
            return Err(ConfigError::EmptyStateName);
        }

        Ok(SpyOptions {
            block_selector,
            link_selector,
            state_name,
            toggle,
        })
    }
}

impl<D: Document> Default for SpyConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> fmt::Debug for SpyConfig<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpyConfig")
            .field("block_selector", &self.block_selector.is_some())
            .field("link_selector", &self.link_selector.is_some())
            .field("state_name", &self.state_name)
            .field("toggle", &self.toggle.is_some())
            .finish()
    }
}

/// Validated configuration. Immutable for the lifetime of a spy.
pub struct SpyOptions<D: Document> {
    block_selector: BlockRule<D>,
    link_selector: LinkRule<D>,
    state_name: StateName,
    toggle: ToggleFn<D>,
}

impl<D: Document> SpyOptions<D> {
    pub fn select_blocks(&self, doc: &D) -> Vec<D::Block> {
        (self.block_selector)(doc)
    }

    pub fn select_link(&self, doc: &D, block_id: &str) -> Option<D::Link> {
        (self.link_selector)(doc, block_id)
    }

    /// Resolve the state name. Calls the caller's rule when it is dynamic.
    pub fn state_name(&self) -> String {
        self.state_name.resolve()
    }

    pub fn toggle(&self, doc: &mut D, link: &D::Link, is_in_view: bool, state: &str) {
        (self.toggle)(doc, link, is_in_view, state)
    }
}

impl<D: Document> Clone for SpyOptions<D> {
    fn clone(&self) -> Self {
        Self {
            block_selector: Arc::clone(&self.block_selector),
            link_selector: Arc::clone(&self.link_selector),
            state_name: self.state_name.clone(),
            toggle: Arc::clone(&self.toggle),
        }
    }
}

impl<D: Document> fmt::Debug for SpyOptions<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpyOptions")
            .field("state_name", &self.state_name)
            .finish_non_exhaustive()
    }
}
