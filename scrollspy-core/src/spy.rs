//! The spy itself: tracker + highlighter behind viewport events.

use crate::document::Document;
use crate::geometry::Interval;
use crate::highlighter::{RefreshReport, ViewportHighlighter};
use crate::options::{ConfigError, SpyConfig, SpyOptions};
use crate::tracker::{PositionTracker, TrackedBlock};

/// Notifications a host forwards from its scrolling context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// Content is laid out; start tracking.
    ContentReady,
    /// Viewport size changed. Positions are re-read.
    Resized,
    /// Scroll offset changed. Cached positions are reused.
    Scrolled,
}

pub struct ScrollSpy<D: Document> {
    options: SpyOptions<D>,
    tracker: PositionTracker<D::Link>,
    highlighter: ViewportHighlighter,
    booted: bool,
}

impl<D: Document + 'static> ScrollSpy<D> {
    /// Merge `config` over the defaults and validate it. Nothing is read from
    /// the document until [`ViewportEvent::ContentReady`].
    pub fn new(config: SpyConfig<D>) -> Result<Self, ConfigError> {
        let options = config.build()?;
        tracing::debug!(?options, "scroll spy configured");
        Ok(Self::with_options(options))
    }
}

impl<D: Document> ScrollSpy<D> {
    pub fn with_options(options: SpyOptions<D>) -> Self {
        Self {
            options,
            tracker: PositionTracker::new(),
            highlighter: ViewportHighlighter::new(),
            booted: false,
        }
    }

    /// Apply one viewport notification. Resize and scroll are ignored until
    /// content is ready, matching listeners that are only bound after load.
    pub fn handle(&mut self, doc: &mut D, event: ViewportEvent) -> Option<RefreshReport> {
        match event {
            ViewportEvent::ContentReady => {
                self.resync(doc);
                self.booted = true;
                Some(self.refresh(doc))
            }
            ViewportEvent::Resized if self.booted => {
                self.resync(doc);
                Some(self.refresh(doc))
            }
            ViewportEvent::Scrolled if self.booted => Some(self.refresh(doc)),
            ViewportEvent::Resized | ViewportEvent::Scrolled => {
                tracing::debug!(?event, "content not ready; ignoring viewport event");
                None
            }
        }
    }

    pub fn resync(&mut self, doc: &D) {
        self.tracker.resync(doc, &self.options);
    }

    /// Highlight against the document's current viewport.
    pub fn refresh(&self, doc: &mut D) -> RefreshReport {
        let viewport = doc.viewport();
        self.refresh_with(doc, viewport)
    }

    pub fn refresh_with(&self, doc: &mut D, viewport: Interval) -> RefreshReport {
        self.highlighter
            .refresh(doc, self.tracker.blocks(), viewport, &self.options)
    }

    pub fn tracked(&self) -> &[TrackedBlock<D::Link>] {
        self.tracker.blocks()
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn options(&self) -> &SpyOptions<D> {
        &self.options
    }
}

impl<D: Document> std::fmt::Debug for ScrollSpy<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSpy")
            .field("options", &self.options)
            .field("tracked", &self.tracker.len())
            .field("booted", &self.booted)
            .finish()
    }
}
