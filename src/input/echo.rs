use super::{LoadError, SentenceSource};
use async_trait::async_trait;

/// Renders the prompt itself
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoSource;

#[async_trait]
impl SentenceSource for EchoSource {
    async fn next_sentence(&self, prompt: &str) -> Result<Option<String>, LoadError> {
        let sentence = prompt.trim();
        if sentence.is_empty() {
            return Ok(None);
        }
        Ok(Some(sentence.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_prompt() {
        let sentence = EchoSource.next_sentence("  The moon is bright. ").await.unwrap();
        assert_eq!(sentence.as_deref(), Some("The moon is bright."));
    }

    #[tokio::test]
    async fn test_echo_blank_is_none() {
        assert_eq!(EchoSource.next_sentence(" \t").await.unwrap(), None);
    }
}
