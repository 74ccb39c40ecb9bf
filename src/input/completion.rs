//! Sentence generation through an OpenAI-compatible chat-completions API.

use super::{LoadError, SentenceSource};
use crate::engine::config::CompletionConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SYSTEM_PROMPT: &str = "Reply to the user with exactly one plain English sentence. \
No lists, no quotation marks, no preamble.";

pub struct CompletionSource {
    config: CompletionConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: usize,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionSource {
    pub fn new(config: CompletionConfig) -> Result<Self, LoadError> {
        if config.api_key.is_empty() {
            return Err(LoadError::MissingApiKey);
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    async fn call_api(&self, prompt: &str) -> Result<ChatResponse, LoadError> {
        debug!(model = %self.config.model, "calling completion API");

        let request = ChatRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LoadError::Completion(format!(
                "request failed with status {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LoadError::Completion(format!("failed to parse response: {}", e)))
    }
}

/// First non-blank line of the first choice
fn first_sentence(response: ChatResponse) -> Option<String> {
    let content = response.choices.into_iter().next()?.message.content?;
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl SentenceSource for CompletionSource {
    async fn next_sentence(&self, prompt: &str) -> Result<Option<String>, LoadError> {
        if prompt.trim().is_empty() {
            return Ok(None);
        }
        let response = self.call_api(prompt).await?;
        let sentence = first_sentence(response);
        debug!(found = sentence.is_some(), "completion received");
        Ok(sentence)
    }
}
