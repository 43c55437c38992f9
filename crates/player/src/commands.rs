//! Parsing of REPL input lines.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    History,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace.
    Empty,
    Command(Command),
    /// Text to send to the tutor, exactly as typed.
    Message(String),
}

pub const HELP: &str = "\
Commands:
  /help      show this help
  /history   reprint the conversation
  /reset     start a new conversation
  /quit      leave (also /exit)";

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    match trimmed.strip_prefix('/').and_then(command_named) {
        Some(command) => Input::Command(command),
        None => Input::Message(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Only a bare known command word counts; anything else starting with `/`
/// is ordinary text for the tutor.
fn command_named(name: &str) -> Option<Command> {
    match name.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Some(Command::Quit),
        "reset" | "clear" => Some(Command::Reset),
        "history" => Some(Command::History),
        "help" | "?" => Some(Command::Help),
        _ => None,
    }
}
