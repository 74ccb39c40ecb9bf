//! Antonym lookup collaborator.
//!
//! The pipeline only sees [`AntonymResolver::resolve`], which never fails:
//! transport errors are logged here and reported as "no antonym".

use super::config::ResolverConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[async_trait]
pub trait AntonymResolver: Send + Sync {
    /// Best antonym for `word`, using the surrounding text as a hint.
    async fn resolve(&self, word: &str, left_context: &str, right_context: &str)
        -> Option<String>;
}

#[async_trait]
impl<T: AntonymResolver + ?Sized> AntonymResolver for Box<T> {
    async fn resolve(
        &self,
        word: &str,
        left_context: &str,
        right_context: &str,
    ) -> Option<String> {
        (**self).resolve(word, left_context, right_context).await
    }
}

/// Resolver that never finds anything (offline mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAntonyms;

#[async_trait]
impl AntonymResolver for NoAntonyms {
    async fn resolve(&self, _word: &str, _left: &str, _right: &str) -> Option<String> {
        None
    }
}

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("no candidates for '{0}'")]
    Empty(String),
}

/// One candidate from a Datamuse-compatible `/words` endpoint
#[derive(Debug, Deserialize)]
struct Candidate {
    word: String,
}

/// HTTP resolver speaking the Datamuse `rel_ant` query.
///
/// `lc` and `rc` take single words, so the last word of the left context and
/// the first word of the right context are sent.
pub struct DatamuseResolver {
    client: Client,
    config: ResolverConfig,
}

impl DatamuseResolver {
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    async fn lookup(
        &self,
        word: &str,
        left_context: &str,
        right_context: &str,
    ) -> Result<String, ResolverError> {
        let mut query: Vec<(&str, String)> = vec![
            ("rel_ant", word.to_string()),
            ("max", self.config.max_results.to_string()),
        ];
        if let Some(lc) = left_context.split_whitespace().last() {
            query.push(("lc", lc.to_string()));
        }
        if let Some(rc) = right_context.split_whitespace().next() {
            query.push(("rc", rc.to_string()));
        }

        debug!(word, "querying antonyms");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolverError::Status(response.status()));
        }

        let candidates: Vec<Candidate> = response.json().await?;
        first_candidate(candidates).ok_or_else(|| ResolverError::Empty(word.to_string()))
    }
}

fn first_candidate(candidates: Vec<Candidate>) -> Option<String> {
    candidates
        .into_iter()
        .map(|c| c.word)
        .find(|w| !w.trim().is_empty())
}

#[async_trait]
impl AntonymResolver for DatamuseResolver {
    async fn resolve(
        &self,
        word: &str,
        left_context: &str,
        right_context: &str,
    ) -> Option<String> {
        if word.trim().is_empty() {
            return None;
        }
        match self.lookup(word, left_context, right_context).await {
            Ok(antonym) => {
                debug!(word, antonym = %antonym, "antonym resolved");
                Some(antonym)
            }
            Err(ResolverError::Empty(_)) => {
                debug!(word, "no antonym found");
                None
            }
            Err(e) => {
                warn!(word, error = %e, "antonym lookup failed");
                None
            }
        }
    }
}
