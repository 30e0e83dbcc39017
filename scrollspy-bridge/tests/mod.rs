use scrollspy_bridge::{BridgeCommand, BridgeSession, CommandParser, Outcome, run_event_loop};
use scrollspy_core::Page;
use tokio::sync::mpsc;

const DEMO_PAGE: &str = include_str!("../pages/chapters.json");

fn demo_session() -> BridgeSession {
    BridgeSession::new(Page::from_json(DEMO_PAGE).unwrap()).unwrap()
}

fn reply(outcome: Outcome) -> String {
    match outcome {
        Outcome::Reply(text) => text,
        Outcome::Quit => panic!("Expected Reply"),
    }
}

// ============================================================================
// CommandParser Tests
// ============================================================================

#[test]
fn test_parse_simple_commands() {
    assert_eq!(CommandParser::parse("ready"), BridgeCommand::Ready);
    assert_eq!(CommandParser::parse("  SHOW "), BridgeCommand::Show);
    assert_eq!(CommandParser::parse("dump"), BridgeCommand::Dump);
    assert_eq!(CommandParser::parse("quit"), BridgeCommand::Exit);
    assert_eq!(CommandParser::parse("   "), BridgeCommand::Empty);
}

#[test]
fn test_parse_scroll_and_resize() {
    assert_eq!(CommandParser::parse("scroll 250"), BridgeCommand::Scroll(250.0));
    assert_eq!(CommandParser::parse("resize 812.5"), BridgeCommand::Resize(812.5));
}

#[test]
fn test_parse_move() {
    assert_eq!(
        CommandParser::parse("move 2 100 40"),
        BridgeCommand::Move {
            index: 2,
            top: 100.0,
            height: 40.0
        }
    );
}

#[test]
fn test_parse_malformed_arguments() {
    assert_eq!(
        CommandParser::parse("scroll far"),
        BridgeCommand::Unknown("scroll far".to_string())
    );
    assert_eq!(
        CommandParser::parse("move 1 2"),
        BridgeCommand::Unknown("move 1 2".to_string())
    );
    assert_eq!(
        CommandParser::parse("jump 3"),
        BridgeCommand::Unknown("jump 3".to_string())
    );
}

// ============================================================================
// BridgeSession Tests
// ============================================================================

#[test]
fn test_session_waits_for_ready() {
    let mut session = demo_session();
    let text = reply(session.apply(BridgeCommand::Scroll(1300.0)).unwrap());
    assert!(text.contains("waiting for content"));
    assert!(!session.spy().is_booted());
}

#[test]
fn test_session_ready_highlights_first_chapters() {
    let mut session = demo_session();
    let text = reply(session.apply(BridgeCommand::Ready).unwrap());
    assert_eq!(text, "[0, 600) active: chapter-introduction, chapter-setup");
    assert_eq!(session.spy().tracked().len(), 5);
}

#[test]
fn test_session_scroll_moves_highlight() {
    let mut session = demo_session();
    session.apply(BridgeCommand::Ready).unwrap();
    let text = reply(session.apply(BridgeCommand::Scroll(1300.0)).unwrap());
    assert_eq!(text, "[1300, 1900) active: chapter-usage");
}

#[test]
fn test_session_move_requires_resize_to_take_effect() {
    let mut session = demo_session();
    session.apply(BridgeCommand::Ready).unwrap();
    session
        .apply(BridgeCommand::Move {
            index: 0,
            top: 5000.0,
            height: 100.0,
        })
        .unwrap();

    let text = reply(session.apply(BridgeCommand::Show).unwrap());
    assert!(text.contains("chapter-introduction"));

    let text = reply(session.apply(BridgeCommand::Resize(600.0)).unwrap());
    assert_eq!(text, "[0, 600) active: chapter-setup");
}

#[test]
fn test_session_move_out_of_range_is_error() {
    let mut session = demo_session();
    let err = session
        .apply(BridgeCommand::Move {
            index: 99,
            top: 0.0,
            height: 1.0,
        })
        .unwrap_err();
    assert!(format!("{err:#}").contains("cannot move block 99"));
}

#[test]
fn test_session_dump_is_json() {
    let mut session = demo_session();
    session.apply(BridgeCommand::Ready).unwrap();
    let text = reply(session.apply(BridgeCommand::Dump).unwrap());
    let page = Page::from_json(&text).unwrap();
    assert_eq!(page.active_links("active").len(), 2);
}

#[test]
fn test_session_exit() {
    let mut session = demo_session();
    assert_eq!(session.apply(BridgeCommand::Exit).unwrap(), Outcome::Quit);
}

#[test]
fn test_session_rejects_empty_state_name() {
    let json = r#"{ "viewport": { "height": 100 }, "selectors": { "state_name": "" } }"#;
    let err = BridgeSession::new(Page::from_json(json).unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("state name must not be empty"));
}

#[test]
fn test_session_reports_configured_state_name() {
    let mut page = Page::from_json(DEMO_PAGE).unwrap();
    page.selectors.state_name = Some("current".to_string());
    let mut session = BridgeSession::new(page).unwrap();

    let text = reply(session.apply(BridgeCommand::Ready).unwrap());
    assert_eq!(text, "[0, 600) current: chapter-introduction, chapter-setup");
    assert_eq!(session.spy().options().state_name(), "current");
}

// ============================================================================
// Event Loop Tests
// ============================================================================

#[tokio::test]
async fn test_event_loop_applies_commands_in_order() {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (reply_tx, mut reply_rx) = mpsc::channel(16);

    let handle = tokio::spawn(run_event_loop(demo_session(), cmd_rx, reply_tx));

    for line in ["scroll 100", "ready", "", "scroll 1300", "bogus", "exit", "show"] {
        cmd_tx.send(CommandParser::parse(line)).await.unwrap_or(());
    }
    drop(cmd_tx);

    let session = handle.await.unwrap();

    let mut replies = Vec::new();
    while let Some(text) = reply_rx.recv().await {
        replies.push(text);
    }

    assert_eq!(
        replies,
        vec![
            "waiting for content (send `ready`)".to_string(),
            "[100, 700) active: chapter-introduction, chapter-setup".to_string(),
            "[1300, 1900) active: chapter-usage".to_string(),
            "unknown command: bogus".to_string(),
        ]
    );
    assert!(session.spy().is_booted());
}

#[tokio::test]
async fn test_event_loop_reports_errors_and_continues() {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (reply_tx, mut reply_rx) = mpsc::channel(16);

    cmd_tx
        .send(BridgeCommand::Move {
            index: 42,
            top: 0.0,
            height: 0.0,
        })
        .await
        .unwrap();
    cmd_tx.send(BridgeCommand::Ready).await.unwrap();
    drop(cmd_tx);

    run_event_loop(demo_session(), cmd_rx, reply_tx).await;

    let first = reply_rx.recv().await.unwrap();
    assert!(first.starts_with("error: cannot move block 42"));
    let second = reply_rx.recv().await.unwrap();
    assert!(second.contains("chapter-introduction"));
}
