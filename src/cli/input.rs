//! Line-based keyboard commands.
//!
//! Each line typed into the terminal is one command. An empty line toggles
//! the timer.

use crate::engine::EngineCommand;
use crate::types::TimerMode;

/// A command typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forwarded to the timer engine
    Engine(EngineCommand),
    /// Minimize the window
    Minimize,
    /// Close (hide) the window
    Close,
    /// Show the window
    Show,
    /// Print the state as JSON
    Status,
    /// Print the key help
    Help,
    /// Quit the application
    Quit,
}

impl InputCommand {
    /// Parses one input line. Returns `None` for unknown input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        let command = match line.as_str() {
            "" | "t" | "toggle" | "start" | "pause" => Self::Engine(EngineCommand::Toggle),
            "r" | "reset" => Self::Engine(EngineCommand::Reset),
            "m" | "minimize" => Self::Minimize,
            "c" | "close" => Self::Close,
            "o" | "show" => Self::Show,
            "status" => Self::Status,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => {
                let mode = other.parse::<TimerMode>().ok()?;
                Self::Engine(EngineCommand::ChangeMode(mode))
            }
        };
        Some(command)
    }
}

/// Key help shown by the `help` command.
pub const HELP_TEXT: &str = "\
Enter / t  開始・一時停止
r          リセット
w / s / l  作業・短い休憩・長い休憩に切り替え
m          最小化
c          閉じる（トレイに常駐）
o          表示
status     状態をJSONで表示
q          終了";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle() {
        for line in ["", "  ", "t", "Toggle", "start", "pause"] {
            assert_eq!(
                InputCommand::parse(line),
                Some(InputCommand::Engine(EngineCommand::Toggle)),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(
            InputCommand::parse("w"),
            Some(InputCommand::Engine(EngineCommand::ChangeMode(TimerMode::Work)))
        );
        assert_eq!(
            InputCommand::parse("short-break"),
            Some(InputCommand::Engine(EngineCommand::ChangeMode(
                TimerMode::ShortBreak
            )))
        );
        assert_eq!(
            InputCommand::parse("l"),
            Some(InputCommand::Engine(EngineCommand::ChangeMode(
                TimerMode::LongBreak
            )))
        );
    }

    #[test]
    fn test_parse_window_commands() {
        assert_eq!(InputCommand::parse("m"), Some(InputCommand::Minimize));
        assert_eq!(InputCommand::parse("close"), Some(InputCommand::Close));
        assert_eq!(InputCommand::parse("o"), Some(InputCommand::Show));
        assert_eq!(InputCommand::parse("q"), Some(InputCommand::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(InputCommand::parse("coffee"), None);
    }
}
