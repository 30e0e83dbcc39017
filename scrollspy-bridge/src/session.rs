//! The spy session: one page, one spy, one command at a time.

use anyhow::{Context, Result};
use scrollspy_core::{Document, Page, RefreshReport, ScrollSpy, ViewportEvent};
use tokio::sync::mpsc;

use crate::commands::BridgeCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

#[derive(Debug)]
pub struct BridgeSession {
    page: Page,
    spy: ScrollSpy<Page>,
}

impl BridgeSession {
    pub fn new(page: Page) -> Result<Self> {
        let spy = ScrollSpy::new(page.spy_config()).context("invalid spy configuration")?;
        Ok(Self { page, spy })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn spy(&self) -> &ScrollSpy<Page> {
        &self.spy
    }

    /// Apply one command to completion.
    pub fn apply(&mut self, command: BridgeCommand) -> Result<Outcome> {
        let reply = match command {
            BridgeCommand::Ready => {
                let report = self.spy.handle(&mut self.page, ViewportEvent::ContentReady);
                self.describe(report)
            }
            BridgeCommand::Scroll(px) => {
                self.page.scroll_to(px);
                let report = self.spy.handle(&mut self.page, ViewportEvent::Scrolled);
                self.describe(report)
            }
            BridgeCommand::Resize(px) => {
                self.page.resize(px);
                let report = self.spy.handle(&mut self.page, ViewportEvent::Resized);
                self.describe(report)
            }
            BridgeCommand::Move { index, top, height } => {
                self.page
                    .set_block_extent(index, top, height)
                    .with_context(|| format!("cannot move block {index}"))?;
                format!("block {index} now at [{top}, {})", top + height)
            }
            BridgeCommand::Show => self.highlighted(),
            BridgeCommand::Dump => {
                serde_json::to_string_pretty(&self.page).context("failed to serialize page")?
            }
            BridgeCommand::Exit => return Ok(Outcome::Quit),
            BridgeCommand::Empty => String::new(),
            BridgeCommand::Unknown(line) => format!("unknown command: {line}"),
        };

        Ok(Outcome::Reply(reply))
    }

    fn describe(&self, report: Option<RefreshReport>) -> String {
        match report {
            Some(report) => {
                tracing::info!(
                    in_view = report.in_view,
                    toggled = report.toggled,
                    skipped = report.skipped,
                    "refreshed"
                );
                self.highlighted()
            }
            None => "waiting for content (send `ready`)".to_string(),
        }
    }

    fn highlighted(&self) -> String {
        let viewport = self.page.viewport();
        let state = self.spy.options().state_name();
        let active = self.page.active_links(&state);
        format!(
            "[{}, {}) {}: {}",
            viewport.top,
            viewport.bottom,
            state,
            if active.is_empty() {
                "-".to_string()
            } else {
                active.join(", ")
            }
        )
    }
}

/// Drain `commands` through the session, sending each reply to `replies`.
///
/// Commands are applied strictly in arrival order; the session is never
/// touched concurrently. Returns the session when the channel closes or an
/// `exit` arrives.
pub async fn run_event_loop(
    mut session: BridgeSession,
    mut commands: mpsc::Receiver<BridgeCommand>,
    replies: mpsc::Sender<String>,
) -> BridgeSession {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "applying command");
        let reply = match session.apply(command) {
            Ok(Outcome::Reply(text)) => text,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::warn!("command failed: {e:#}");
                format!("error: {e:#}")
            }
        };

        if reply.is_empty() {
            continue;
        }
        if replies.send(reply).await.is_err() {
            break;
        }
    }

    session
}
