use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::{AntonymResolver, Classifier, ContrarianError, Pipeline, RenderReport};
use crate::input::{clipboard, file, split_sentences, SentenceSource};
use crate::rendering::{OutputSink, StreamRenderer};
use crate::repl::HELP_TEXT;
use std::io;
use std::time::Duration;
use tracing::{debug, warn};

pub struct App<C: Classifier, A: AntonymResolver> {
    pub mode: AppMode,
    source: Box<dyn SentenceSource>,
    pipeline: Pipeline<C, A>,
}

impl<C: Classifier, A: AntonymResolver> App<C, A> {
    pub fn new(source: Box<dyn SentenceSource>, pipeline: Pipeline<C, A>) -> Self {
        Self {
            mode: AppMode::Prompt,
            source,
            pipeline,
        }
    }

    /// Handles one event and returns a report per rendered sentence.
    ///
    /// Source and load failures are reported on the output and the session
    /// carries on; only sink errors propagate.
    pub async fn handle_event<S: OutputSink>(
        &mut self,
        event: AppEvent,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<Vec<RenderReport>> {
        debug!(?event, "handling event");
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Ok(Vec::new())
            }
            AppEvent::Help => {
                notice(renderer, HELP_TEXT).await?;
                Ok(Vec::new())
            }
            AppEvent::Ignore => Ok(Vec::new()),
            AppEvent::InvalidCommand(input) => {
                let message = format!("Unknown command: {} (:h for help)", input);
                notice(renderer, &message).await?;
                Ok(Vec::new())
            }
            AppEvent::Prompt(text) => match self.source.next_sentence(&text).await {
                Ok(sentence) => Ok(vec![self.render(sentence.as_deref(), renderer).await?]),
                Err(e) => {
                    warn!(error = %e, "sentence source failed");
                    notice(renderer, &format!("! {}", e)).await?;
                    Ok(Vec::new())
                }
            },
            AppEvent::LoadFile(path) => {
                let loaded = file::load_file_safe(&path);
                self.render_document(loaded, renderer).await
            }
            AppEvent::LoadClipboard => {
                let loaded = clipboard::load().map_err(ContrarianError::from);
                self.render_document(loaded, renderer).await
            }
        }
    }

    async fn render_document<S: OutputSink>(
        &mut self,
        loaded: Result<String, ContrarianError>,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<Vec<RenderReport>> {
        let text = match loaded {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "could not load document");
                notice(renderer, &format!("! {}", e)).await?;
                return Ok(Vec::new());
            }
        };

        let mut reports = Vec::new();
        for sentence in split_sentences(&text) {
            reports.push(self.render(Some(&sentence), renderer).await?);
        }
        Ok(reports)
    }

    async fn render<S: OutputSink>(
        &mut self,
        sentence: Option<&str>,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<RenderReport> {
        self.mode = AppMode::Rendering;
        let report = self.pipeline.run(sentence, renderer).await;
        self.mode = AppMode::Prompt;
        report
    }
}

async fn notice<S: OutputSink>(renderer: &mut StreamRenderer<S>, message: &str) -> io::Result<()> {
    renderer.type_text(message, Duration::ZERO).await?;
    renderer.type_text("\n", Duration::ZERO).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{Config, MutationConfig, TypingConfig};
    use crate::engine::{LexiconClassifier, NoAntonyms};
    use crate::input::{EchoSource, LoadError};
    use crate::rendering::MemorySink;
    use async_trait::async_trait;
    use std::fs;

    struct Failing;

    #[async_trait]
    impl SentenceSource for Failing {
        async fn next_sentence(&self, _prompt: &str) -> Result<Option<String>, LoadError> {
            Err(LoadError::Completion("service down".to_string()))
        }
    }

    fn app(source: Box<dyn SentenceSource>) -> App<LexiconClassifier, NoAntonyms> {
        let config = Config {
            typing: TypingConfig::instant(),
            mutation: MutationConfig {
                negation_step: 0.0,
                glitch_probability: 0.0,
                noun_swap_probability: 0.0,
            },
            seed: Some(11),
            ..Config::default()
        };
        App::new(source, Pipeline::new(LexiconClassifier, NoAntonyms, &config))
    }

    fn renderer() -> StreamRenderer<MemorySink> {
        StreamRenderer::new(MemorySink::new(), Duration::ZERO)
    }

    #[test]
    fn test_app_starts_at_prompt() {
        assert_eq!(app(Box::new(EchoSource)).mode, AppMode::Prompt);
    }

    #[tokio::test]
    async fn test_app_handle_event_quit() {
        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        app.handle_event(AppEvent::Quit, &mut r).await.unwrap();
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[tokio::test]
    async fn test_app_handle_event_help() {
        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        app.handle_event(AppEvent::Help, &mut r).await.unwrap();
        assert!(r.sink().screen().contains(":q, :quit"));
        assert_eq!(app.mode, AppMode::Prompt);
    }

    #[tokio::test]
    async fn test_prompt_renders_and_returns_to_prompt() {
        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        let reports = app
            .handle_event(AppEvent::Prompt("Dreams fade".to_string()), &mut r)
            .await
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].text(), "Dreams fade");
        assert_eq!(r.sink().screen(), "Dreams fade \n\n");
        assert_eq!(app.mode, AppMode::Prompt);
    }

    #[tokio::test]
    async fn test_source_failure_is_reported_not_fatal() {
        let mut app = app(Box::new(Failing));
        let mut r = renderer();
        let reports = app
            .handle_event(AppEvent::Prompt("anything".to_string()), &mut r)
            .await
            .unwrap();
        assert!(reports.is_empty());
        assert!(r.sink().screen().contains("service down"));
        assert_eq!(app.mode, AppMode::Prompt);
    }

    #[tokio::test]
    async fn test_invalid_command_notice() {
        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        app.handle_event(AppEvent::InvalidCommand(":wq".to_string()), &mut r)
            .await
            .unwrap();
        assert!(r.sink().screen().starts_with("Unknown command: :wq"));
    }

    #[tokio::test]
    async fn test_load_file_renders_each_sentence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document.txt");
        fs::write(&path, "Dreams fade.\nThe sky is blue.").unwrap();

        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        let reports = app
            .handle_event(AppEvent::LoadFile(path.display().to_string()), &mut r)
            .await
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(r.sink().screen(), "Dreams fade. \n\nThe sky is blue. \n\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let mut app = app(Box::new(EchoSource));
        let mut r = renderer();
        let reports = app
            .handle_event(AppEvent::LoadFile("/nonexistent/words.txt".to_string()), &mut r)
            .await
            .unwrap();
        assert!(reports.is_empty());
        assert!(r.sink().screen().starts_with("! I/O error"));
    }
}
