//! Line-oriented input adapter: one command per line of stdin.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Submit(String),
    ToggleHints,
    /// Zero-based position in the displayed hint list.
    UseHint(usize),
    Restart,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Type a word and press Enter to chain it.
  /hint      show or hide hints
  /use <n>   play hint number n
  /restart   start a new game
  /help      show this help
  /quit      exit";

pub fn parse_command(line: &str) -> InputCommand {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return InputCommand::Submit(trimmed.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next();
    match (name.as_str(), arg) {
        ("hint" | "hints", None) => InputCommand::ToggleHints,
        ("use", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => InputCommand::UseHint(n - 1),
            _ => InputCommand::Unknown(trimmed.to_string()),
        },
        ("restart" | "new", None) => InputCommand::Restart,
        ("help" | "?", None) => InputCommand::Help,
        ("quit" | "exit", None) => InputCommand::Quit,
        _ => InputCommand::Unknown(trimmed.to_string()),
    }
}
