use crate::app::AppEvent;

/// Commands that can be parsed from one input line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Quit,

    Help,

    /// Render the sentences of a text file
    LoadFile(String),

    /// Render the sentences on the clipboard
    LoadClipboard,

    /// Free text handed to the sentence source
    Prompt(String),

    /// Blank line
    Empty,

    /// Unrecognised `:` command
    Unknown(String),
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::Prompt(text) => AppEvent::Prompt(text),
        ReplCommand::Empty => AppEvent::Ignore,
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
