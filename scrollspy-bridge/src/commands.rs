//! Viewport command parsing.
//!
//! One command per line:
//!
//! ```text
//! ready                      content loaded, start spying
//! scroll <px>                scroll to an absolute offset
//! resize <px>                change the viewport height
//! move <index> <top> <h>     relayout a block (seen after the next resize)
//! show                       list highlighted links
//! dump                       print the page as JSON
//! exit
//! ```

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCommand {
    Ready,
    Scroll(f64),
    Resize(f64),
    Move { index: usize, top: f64, height: f64 },
    Show,
    Dump,
    Exit,
    /// Blank line.
    Empty,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> BridgeCommand {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        let Some(cmd) = parts.first() else {
            return BridgeCommand::Empty;
        };

        match cmd.to_ascii_lowercase().as_str() {
            "ready" | "load" => return BridgeCommand::Ready,
            "show" | "ls" => return BridgeCommand::Show,
            "dump" => return BridgeCommand::Dump,
            "exit" | "quit" => return BridgeCommand::Exit,
            "scroll" => {
                if let Some(px) = parts.get(1).and_then(|s| s.parse::<f64>().ok()) {
                    return BridgeCommand::Scroll(px);
                }
            }
            "resize" => {
                if let Some(px) = parts.get(1).and_then(|s| s.parse::<f64>().ok()) {
                    return BridgeCommand::Resize(px);
                }
            }
            "move" => {
                if let (Some(index), Some(top), Some(height)) = (
                    parts.get(1).and_then(|s| s.parse::<usize>().ok()),
                    parts.get(2).and_then(|s| s.parse::<f64>().ok()),
                    parts.get(3).and_then(|s| s.parse::<f64>().ok()),
                ) {
                    return BridgeCommand::Move { index, top, height };
                }
            }
            _ => {}
        }

        BridgeCommand::Unknown(trimmed.to_string())
    }
}
