//! Host command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on. Army tokens are kept as raw
//! text here; the engine parses them so it can report token errors back to
//! the host.

/// A parsed host-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; engine replies with id, options and `vanguardok`.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Replace the current army set.
    Armies { tokens: String },

    /// Append to the current army set.
    Add { tokens: String },

    /// Empty the current army set.
    Clear,

    /// Load the built-in demo army set.
    Demo,

    /// Search for the best ordering of the current army set.
    Go,

    /// Score a fixed ordering given inline.
    Score { tokens: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "vanguard" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "clear" => Some(Command::Clear),
        "demo" => Some(Command::Demo),
        "go" => Some(Command::Go),

        "setoption" => parse_setoption(&tokens),
        "armies" => rest_of_line(trimmed, "armies").map(|tokens| Command::Armies { tokens }),
        "add" => rest_of_line(trimmed, "add").map(|tokens| Command::Add { tokens }),
        "score" => rest_of_line(trimmed, "score").map(|tokens| Command::Score { tokens }),

        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                tracing::warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Captures everything after the command keyword; the keyword alone is
/// malformed.
fn rest_of_line(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword).unwrap_or("").trim();
    if rest.is_empty() {
        tracing::warn!(command = keyword, "malformed command: expected army tokens");
        return None;
    }
    Some(rest.to_string())
}
