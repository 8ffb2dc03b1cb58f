//! # In-Chat Commands
//!
//! File: cli/src/commands/chat/slash.rs
//!
//! Lines starting with `/` control the session instead of being sent to the
//! backend.
//!

#[derive(Debug, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    History,
    /// Write the transcript to a report file.
    Report,
    Exit,
    Unknown(String),
}

/// Parses a line as a slash command; `None` means it is a question.
pub fn parse(line: &str) -> Option<SlashCommand> {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return None;
    }
    let name = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();
    Some(match name.as_str() {
        "/help" | "/h" | "/?" => SlashCommand::Help,
        "/history" => SlashCommand::History,
        "/report" | "/download" => SlashCommand::Report,
        "/exit" | "/quit" | "/q" => SlashCommand::Exit,
        _ => SlashCommand::Unknown(name),
    })
}
