//! Drives the toggle procedure from the current viewport.

use crate::document::Document;
use crate::geometry::{Interval, classify};
use crate::options::SpyOptions;
use crate::tracker::TrackedBlock;

/// Counts from one refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshReport {
    /// Blocks classified as in view (linked or not).
    pub in_view: usize,
    /// Toggle invocations made.
    pub toggled: usize,
    /// Blocks without a link, never toggled.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportHighlighter;

impl ViewportHighlighter {
    pub fn new() -> Self {
        Self
    }

    /// Classify every tracked block against `viewport` and toggle its link.
    ///
    /// Blocks are visited in document order, one toggle call each, each call
    /// completing before the next starts. Nothing is deduplicated: refreshing
    /// twice with the same viewport repeats every call.
    ///
    /// The state name is resolved right before each toggle, never for
    /// blocks without a link.
    pub fn refresh<D: Document>(
        &self,
        doc: &mut D,
        tracked: &[TrackedBlock<D::Link>],
        viewport: Interval,
        options: &SpyOptions<D>,
    ) -> RefreshReport {
        let mut report = RefreshReport::default();

        for (index, block) in tracked.iter().enumerate() {
            let case = classify(viewport, block.interval);
            let is_in_view = case.is_some();
            if is_in_view {
                report.in_view += 1;
            }

            let Some(link) = &block.link else {
                tracing::trace!(index, "block has no link; skipping toggle");
                report.skipped += 1;
                continue;
            };

            // Resolved per toggle so a dynamic rule sees every call.
            let state = options.state_name();
            tracing::trace!(index, ?case, is_in_view, %state, "toggling link");
            options.toggle(doc, link, is_in_view, &state);
            report.toggled += 1;
        }

        tracing::debug!(
            top = viewport.top,
            bottom = viewport.bottom,
            in_view = report.in_view,
            toggled = report.toggled,
            "highlighted viewport"
        );

        report
    }
}
