/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Prompt(String),
    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    InvalidCommand(String),
    Ignore,
}
