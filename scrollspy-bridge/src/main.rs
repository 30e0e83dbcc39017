// scrollspy-bridge/src/main.rs

use anyhow::{Context, Result};
use scrollspy_bridge::util::{init_tracing, install_panic_hook};
use scrollspy_bridge::{BridgeCommand, BridgeSession, CommandParser, run_event_loop};
use scrollspy_core::Page;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const DEMO_PAGE: &str = include_str!("../pages/chapters.json");

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    install_panic_hook();

    let page = match std::env::args().nth(1) {
        Some(path) => Page::load(&path).with_context(|| format!("loading {path}"))?,
        None => Page::from_json(DEMO_PAGE).context("built-in demo page")?,
    };
    tracing::info!(
        blocks = page.blocks.len(),
        links = page.links.len(),
        "page loaded"
    );

    let session = BridgeSession::new(page)?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<BridgeCommand>(64);
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(64);

    // Printer: everything the session says goes to stdout.
    let printer = tokio::spawn(async move {
        while let Some(reply) = reply_rx.recv().await {
            println!("{reply}");
        }
    });

    let spy_loop = tokio::spawn(run_event_loop(session, cmd_rx, reply_tx));

    eprintln!("[scrollspy] ready. Commands: ready, scroll <px>, resize <px>, move <i> <top> <h>, show, dump, exit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n[scrollspy] Ctrl+C received, exiting…");
                break;
            }

            line = lines.next_line() => {
                let Some(line) = line.context("stdin read failed")? else {
                    break;
                };

                let command = CommandParser::parse(&line);
                let quit = command == BridgeCommand::Exit;
                if cmd_tx.send(command).await.is_err() || quit {
                    break;
                }
            }
        }
    }

    drop(cmd_tx);
    let session = spy_loop.await.context("spy loop panicked")?;
    printer.await.context("printer panicked")?;

    tracing::info!(
        tracked = session.spy().tracked().len(),
        "scrollspy bridge stopped"
    );
    Ok(())
}
