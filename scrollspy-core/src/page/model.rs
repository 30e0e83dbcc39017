//! Serializable page description.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::options::DEFAULT_STATE_NAME;

fn default_block_class() -> String {
    "block".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewportSpec {
    #[serde(default)]
    pub scroll: f64,
    pub height: f64,
}

/// A watched content region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_block_class")]
    pub class: String,
    pub top: f64,
    pub height: f64,
}

impl PageBlock {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: Some(id.into()),
            class: default_block_class(),
            top,
            height,
        }
    }

    pub fn anonymous(top: f64, height: f64) -> Self {
        Self {
            id: None,
            class: default_block_class(),
            top,
            height,
        }
    }
}

/// A navigation link pointing at a block id (`href="#target"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub target: String,
    #[serde(default)]
    pub states: BTreeSet<String>,
}

impl PageLink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            states: BTreeSet::new(),
        }
    }
}

/// How a spy built from this page selects blocks and names its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSelectors {
    #[serde(default = "default_block_class")]
    pub block_class: String,
    #[serde(default)]
    pub state_name: Option<String>,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            block_class: default_block_class(),
            state_name: None,
        }
    }
}

impl PageSelectors {
    pub fn effective_state_name(&self) -> &str {
        self.state_name.as_deref().unwrap_or(DEFAULT_STATE_NAME)
    }
}
