/// Session mode: waiting for input, rendering a sentence, or finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Prompt,
    Rendering,
    Quit,
}
