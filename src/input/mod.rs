//! Where sentences come from: the prompt itself, a chat-completion API,
//! a file or the clipboard.

use async_trait::async_trait;
use thiserror::Error;

pub mod clipboard;
pub mod completion;
pub mod echo;
pub mod file;

pub use completion::CompletionSource;
pub use echo::EchoSource;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Completion API error: {0}")]
    Completion(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CONTRARIAN_API_KEY not set")]
    MissingApiKey,
}

/// Produces the sentence to render for one user prompt.
///
/// `Ok(None)` means nothing usable came back; the session renders nothing
/// and waits for the next prompt.
#[async_trait]
pub trait SentenceSource: Send + Sync {
    async fn next_sentence(&self, prompt: &str) -> Result<Option<String>, LoadError>;
}

/// Splits loaded text into sentences at `.`, `!` or `?` word endings.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if ends_sentence(word) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }

    sentences
}

fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}'])
        .ends_with(['.', '!', '?'])
}
