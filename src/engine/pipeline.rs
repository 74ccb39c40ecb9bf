//! Per-sentence orchestration: classify, mutate, and drive the renderer.
//!
//! Stages run strictly in order (`Announcing`, `Previewing`, one
//! `Streaming(i)` per token, `Done`). Every token is typed as-is first;
//! a mutation then pauses, erases it and types the replacement.

use super::antonym::AntonymResolver;
use super::classifier::Classifier;
use super::config::{Config, MutationConfig, TypingConfig};
use super::glitcher::Glitcher;
use super::negator::negate;
use super::token::{extract_punctuation, Token, TokenKind};
use crate::rendering::{OutputSink, StreamRenderer};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::io;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Announcing,
    Previewing,
    Streaming(usize),
    Done,
}

/// What happened to one streamed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Kept,
    Negated,
    Glitched,
    Antonym,
    NounSwap,
}

/// Escalating negation odds for one sentence.
///
/// Starts at 1; each verb visit increments it and negates with probability
/// `min(1, count * step)`. A negation resets it to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct NegationCounter {
    count: u32,
    step: f64,
}

impl NegationCounter {
    pub fn new(step: f64) -> Self {
        Self { count: 1, step }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn probability(&self) -> f64 {
        (self.count as f64 * self.step).clamp(0.0, 1.0)
    }

    /// Registers a verb; returns true when it should be negated
    pub fn visit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.count += 1;
        let fire = rng.gen_bool(self.probability());
        if fire {
            self.count = 0;
        }
        fire
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub stages: Vec<Stage>,
    /// Final text of each token, in order
    pub words: Vec<String>,
    pub mutations: Vec<Mutation>,
}

impl RenderReport {
    /// Final sentence as it stands on screen
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    pub fn count(&self, mutation: Mutation) -> usize {
        self.mutations.iter().filter(|m| **m == mutation).count()
    }
}

pub struct Pipeline<C: Classifier, A: AntonymResolver> {
    classifier: C,
    resolver: A,
    glitcher: Glitcher,
    mutation: MutationConfig,
    typing: TypingConfig,
    rng: StdRng,
}

impl<C: Classifier, A: AntonymResolver> Pipeline<C, A> {
    pub fn new(classifier: C, resolver: A, config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            classifier,
            resolver,
            glitcher: Glitcher::new(config.glitch.clone()),
            mutation: config.mutation.clone(),
            typing: config.typing.clone(),
            rng,
        }
    }

    /// Replaces the random source
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Renders one sentence. `None` (no sentence produced upstream) and
    /// sentences without tokens render nothing.
    pub async fn run<S: OutputSink>(
        &mut self,
        sentence: Option<&str>,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<RenderReport> {
        let Some(sentence) = sentence else {
            debug!("no sentence to render");
            return Ok(RenderReport::default());
        };

        let tokens = self.classifier.classify(sentence);
        if tokens.is_empty() {
            debug!("sentence produced no tokens");
            return Ok(RenderReport::default());
        }

        let nouns: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Noun)
            .collect();
        let mut counter = NegationCounter::new(self.mutation.negation_step);
        let mut report = RenderReport::default();
        let mut stage = Stage::Announcing;

        loop {
            debug!(?stage, "pipeline stage");
            report.stages.push(stage);
            stage = match stage {
                Stage::Announcing => {
                    self.announce(renderer).await?;
                    Stage::Previewing
                }
                Stage::Previewing => {
                    self.preview(sentence, renderer).await?;
                    Stage::Streaming(0)
                }
                Stage::Streaming(i) if i < tokens.len() => {
                    let (word, mutation) = if i == 0 {
                        self.stream_first(&tokens[0], renderer).await?
                    } else {
                        self.stream_token(
                            i,
                            &tokens,
                            &nouns,
                            &report.words,
                            &mut counter,
                            renderer,
                        )
                        .await?
                    };
                    report.words.push(word);
                    report.mutations.push(mutation);
                    Stage::Streaming(i + 1)
                }
                Stage::Streaming(_) => Stage::Done,
                Stage::Done => {
                    renderer.type_text("\n\n", Duration::ZERO).await?;
                    break;
                }
            };
        }

        debug!(
            negated = report.count(Mutation::Negated),
            glitched = report.count(Mutation::Glitched),
            antonyms = report.count(Mutation::Antonym),
            swapped = report.count(Mutation::NounSwap),
            "sentence rendered"
        );
        Ok(report)
    }

    async fn announce<S: OutputSink>(
        &mut self,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<()> {
        let mut printed = renderer
            .type_text(&self.typing.announce_label, self.typing.char_delay)
            .await?;
        for _ in 0..self.typing.announce_dots {
            printed += renderer.type_text(".", self.typing.dot_delay).await?;
        }
        renderer.erase(printed).await
    }

    async fn preview<S: OutputSink>(
        &mut self,
        sentence: &str,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<()> {
        let preview: Vec<&str> = sentence
            .split_whitespace()
            .take(self.typing.preview_words)
            .collect();
        let printed = renderer
            .type_text(&preview.join(" "), self.typing.char_delay)
            .await?;
        renderer.pause(self.typing.preview_pause).await;
        renderer.erase(printed).await
    }

    async fn stream_first<S: OutputSink>(
        &mut self,
        token: &Token,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<(String, Mutation)> {
        renderer.type_text(&token.text, self.typing.char_delay).await?;
        renderer.type_text(" ", self.typing.char_delay).await?;
        Ok((token.text.clone(), Mutation::Kept))
    }

    async fn stream_token<S: OutputSink>(
        &mut self,
        index: usize,
        tokens: &[Token],
        nouns: &[&Token],
        finalized: &[String],
        counter: &mut NegationCounter,
        renderer: &mut StreamRenderer<S>,
    ) -> io::Result<(String, Mutation)> {
        let token = &tokens[index];
        let printed = renderer.type_text(&token.text, self.typing.char_delay).await?;

        if token.kind == TokenKind::Verb && counter.visit(&mut self.rng) {
            let negated = negate(&token.text);
            debug!(
                position = token.position,
                from = %token.text,
                to = %negated,
                "negating verb"
            );
            self.rewrite(renderer, printed, &negated).await?;
            return Ok((negated, Mutation::Negated));
        }

        if self.rng.gen_bool(self.mutation.glitch_probability) {
            let corrupted = self.glitcher.glitch(&token.text, &mut self.rng);
            debug!(position = token.position, "glitching token");
            self.rewrite(renderer, printed, &corrupted).await?;
            return Ok((corrupted, Mutation::Glitched));
        }

        if token.kind == TokenKind::Adjective {
            let (word, punctuation) = extract_punctuation(&token.text);
            let left = finalized.join(" ");
            let right = tokens[index + 1..]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(antonym) = self
                .resolver
                .resolve(&word.to_lowercase(), &left, &right)
                .await
            {
                let replacement = format!("{}{}", antonym, punctuation);
                debug!(
                    position = token.position,
                    from = %token.text,
                    to = %replacement,
                    "antonym"
                );
                self.rewrite(renderer, printed, &replacement).await?;
                return Ok((replacement, Mutation::Antonym));
            }
            renderer.type_text(" ", self.typing.char_delay).await?;
            return Ok((token.text.clone(), Mutation::Kept));
        }

        if token.kind == TokenKind::Noun
            && self.rng.gen_bool(self.mutation.noun_swap_probability)
        {
            let replacement = swap_noun(token, nouns, &mut self.rng);
            debug!(
                position = token.position,
                from = %token.text,
                to = %replacement,
                "swapping noun"
            );
            self.rewrite(renderer, printed, &replacement).await?;
            return Ok((replacement, Mutation::NounSwap));
        }

        renderer.type_text(" ", self.typing.char_delay).await?;
        Ok((token.text.clone(), Mutation::Kept))
    }

    /// Pause, erase `printed` columns, type `replacement` and a space
    async fn rewrite<S: OutputSink>(
        &self,
        renderer: &mut StreamRenderer<S>,
        printed: usize,
        replacement: &str,
    ) -> io::Result<()> {
        renderer.pause(self.typing.rewrite_pause).await;
        renderer.erase(printed).await?;
        renderer.type_text(replacement, self.typing.char_delay).await?;
        renderer.type_text(" ", self.typing.char_delay).await?;
        Ok(())
    }
}

/// Another noun of the sentence (the token itself when it is the only one),
/// carrying the token's own trailing punctuation.
fn swap_noun<R: Rng + ?Sized>(token: &Token, nouns: &[&Token], rng: &mut R) -> String {
    let others: Vec<&Token> = nouns
        .iter()
        .copied()
        .filter(|n| n.position != token.position)
        .collect();
    let chosen = others.choose(rng).copied().unwrap_or(token);

    let (word, _) = extract_punctuation(&chosen.text);
    let (_, punctuation) = extract_punctuation(&token.text);
    format!("{}{}", word, punctuation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::antonym::NoAntonyms;
    use crate::engine::classifier::LexiconClassifier;
    use crate::engine::config::GlitchConfig;
    use crate::rendering::MemorySink;
    use async_trait::async_trait;

    struct Fixed(&'static str);

    #[async_trait]
    impl AntonymResolver for Fixed {
        async fn resolve(&self, _word: &str, _left: &str, _right: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn quiet_config(seed: u64) -> Config {
        Config {
            typing: TypingConfig::instant(),
            mutation: MutationConfig {
                negation_step: 0.0,
                glitch_probability: 0.0,
                noun_swap_probability: 0.0,
            },
            seed: Some(seed),
            ..Config::default()
        }
    }

    fn renderer() -> StreamRenderer<MemorySink> {
        StreamRenderer::new(MemorySink::new(), Duration::ZERO)
    }

    #[test]
    fn test_negation_counter_starts_at_one() {
        let counter = NegationCounter::new(0.3);
        assert_eq!(counter.count(), 1);
        assert!((counter.probability() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_negation_counter_caps_at_one() {
        let mut counter = NegationCounter::new(0.3);
        let mut rng = StdRng::seed_from_u64(5);
        // count reaches 4 at the latest; 4 * 0.3 clamps to 1
        let mut fired = false;
        for _ in 0..3 {
            fired |= counter.visit(&mut rng);
        }
        assert!(fired);
    }

    #[test]
    fn test_negation_counter_resets_on_fire() {
        let mut counter = NegationCounter::new(1.0);
        let mut rng = StdRng::seed_from_u64(6);
        assert!(counter.visit(&mut rng));
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_escalation_is_monotonic() {
        let mut counter = NegationCounter::new(0.3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut attempts = [0usize; 5];
        let mut fires = [0usize; 5];

        for _ in 0..60_000 {
            let k = (counter.count() + 1) as usize;
            let fired = counter.visit(&mut rng);
            attempts[k] += 1;
            fires[k] += fired as usize;
        }

        let mut previous = 0.0;
        for k in 1..=4 {
            let observed = fires[k] as f64 / attempts[k] as f64;
            let expected = (k as f64 * 0.3).min(1.0);
            assert!((observed - expected).abs() < 0.03, "k={k}: {observed}");
            assert!(observed >= previous);
            previous = observed;
        }
    }

    #[test]
    fn test_swap_noun_prefers_other_nouns() {
        let a = Token::new(TokenKind::Noun, "cat", 1);
        let b = Token::new(TokenKind::Noun, "danger.", 4);
        let nouns = vec![&a, &b];
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            assert_eq!(swap_noun(&a, &nouns, &mut rng), "danger");
            assert_eq!(swap_noun(&b, &nouns, &mut rng), "cat.");
        }
    }

    #[test]
    fn test_swap_noun_single_noun_uses_itself() {
        let a = Token::new(TokenKind::Noun, "void", 2);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(swap_noun(&a, &[&a], &mut rng), "void");
    }

    #[tokio::test]
    async fn test_none_renders_nothing() {
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &quiet_config(1));
        let mut r = renderer();
        let report = pipeline.run(None, &mut r).await.unwrap();
        assert!(report.stages.is_empty());
        assert_eq!(r.sink().written(), 0);
    }

    #[tokio::test]
    async fn test_blank_sentence_renders_nothing() {
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &quiet_config(1));
        let mut r = renderer();
        let report = pipeline.run(Some("   "), &mut r).await.unwrap();
        assert_eq!(report, RenderReport::default());
        assert_eq!(r.sink().written(), 0);
    }

    #[tokio::test]
    async fn test_stage_order() {
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &quiet_config(1));
        let mut r = renderer();
        let report = pipeline.run(Some("Dreams fade"), &mut r).await.unwrap();
        assert_eq!(
            report.stages,
            vec![
                Stage::Announcing,
                Stage::Previewing,
                Stage::Streaming(0),
                Stage::Streaming(1),
                Stage::Streaming(2),
                Stage::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_unmutated_render_matches_sentence() {
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &quiet_config(1));
        let mut r = renderer();
        let sentence = "You always run toward danger eagerly.";
        let report = pipeline.run(Some(sentence), &mut r).await.unwrap();
        assert_eq!(report.text(), sentence);
        assert_eq!(r.sink().screen(), format!("{} \n\n", sentence));
        assert!(report.mutations.iter().all(|m| *m == Mutation::Kept));
    }

    #[tokio::test]
    async fn test_forced_negation() {
        let mut config = quiet_config(2);
        config.mutation.negation_step = 1.0;
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &config);
        let mut r = renderer();
        let report = pipeline
            .run(Some("She is running fast"), &mut r)
            .await
            .unwrap();
        assert_eq!(report.words, vec!["She", "is not running", "fast"]);
        assert_eq!(r.sink().screen(), "She is not running fast \n\n");
        assert_eq!(report.count(Mutation::Negated), 1);
    }

    #[tokio::test]
    async fn test_adjective_antonym_keeps_punctuation() {
        let mut pipeline = Pipeline::new(LexiconClassifier, Fixed("green"), &quiet_config(3));
        let mut r = renderer();
        let report = pipeline
            .run(Some("The sky is blue."), &mut r)
            .await
            .unwrap();
        assert_eq!(report.words.last().map(String::as_str), Some("green."));
        assert_eq!(r.sink().screen(), "The sky is green. \n\n");
    }

    #[tokio::test]
    async fn test_adjective_without_antonym_stands() {
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &quiet_config(3));
        let mut r = renderer();
        let report = pipeline
            .run(Some("The sky is blue."), &mut r)
            .await
            .unwrap();
        assert_eq!(report.text(), "The sky is blue.");
    }

    #[tokio::test]
    async fn test_forced_glitch_keeps_first_token() {
        let mut config = quiet_config(4);
        config.mutation.glitch_probability = 1.0;
        config.glitch = GlitchConfig {
            recase_probability: 0.0,
            replace_probability: 1.0,
            duplicate_probability: 0.0,
            diacritic_probability: 0.0,
        };
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &config);
        let mut r = renderer();
        let report = pipeline.run(Some("The old man"), &mut r).await.unwrap();
        assert_eq!(report.words[0], "The");
        assert_eq!(report.count(Mutation::Glitched), 2);
        assert_ne!(report.words[1], "old");
        assert_eq!(report.words[1].chars().count(), 3);
    }

    #[tokio::test]
    async fn test_forced_noun_swap() {
        let mut config = quiet_config(5);
        config.mutation.noun_swap_probability = 1.0;
        let mut pipeline = Pipeline::new(LexiconClassifier, NoAntonyms, &config);
        let mut r = renderer();
        let report = pipeline
            .run(Some("The cat watched the dog"), &mut r)
            .await
            .unwrap();
        assert_eq!(report.words, vec!["The", "dog", "watched", "the", "cat"]);
    }

    #[tokio::test]
    async fn test_same_seed_same_output() {
        let sentence = "The tiny robots are singing softly to the cold moon.";
        let mut config = Config {
            typing: TypingConfig::instant(),
            seed: Some(42),
            ..Config::default()
        };
        config.resolver.offline = true;

        let mut first = renderer();
        let mut second = renderer();
        Pipeline::new(LexiconClassifier, NoAntonyms, &config)
            .run(Some(sentence), &mut first)
            .await
            .unwrap();
        Pipeline::new(LexiconClassifier, NoAntonyms, &config)
            .run(Some(sentence), &mut second)
            .await
            .unwrap();
        assert_eq!(first.sink().screen(), second.sink().screen());
    }
}
