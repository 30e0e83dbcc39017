//! # ScrollSpy Core
//!
//! Highlights navigation links for the content blocks visible in a viewport.
//!
//! - [`PositionTracker`] caches each block's vertical extent and link.
//! - [`ViewportHighlighter`] classifies blocks against the viewport and
//!   toggles a named state on their links.
//! - [`ScrollSpy`] wires both to content-ready / resize / scroll events.
//!
//! The host supplies layout through the [`Document`] trait. [`page::Page`]
//! is a ready-made in-memory implementation.

pub mod document;
pub mod geometry;
pub mod highlighter;
pub mod options;
pub mod page;
pub mod spy;
pub mod tracker;

pub use document::Document;
pub use geometry::{Interval, Visibility, classify, intersects};
pub use highlighter::{RefreshReport, ViewportHighlighter};
pub use options::{
    ConfigError, DEFAULT_STATE_NAME, SpyConfig, SpyOptions, StateName, default_toggle,
};
pub use page::{Page, PageError};
pub use spy::{ScrollSpy, ViewportEvent};
pub use tracker::{PositionTracker, TrackedBlock};
