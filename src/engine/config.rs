// Configuration for the contrarian pipeline, renderer and collaborators.
// Every tunable lives here with its default; the binary overrides from CLI flags.

use std::time::Duration;

/// Per-character corruption probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchConfig {
    /// Re-case to upper or lower (default 0.10)
    pub recase_probability: f64,

    /// Replace with a glitch-alphabet symbol (default 0.25)
    pub replace_probability: f64,

    /// Duplicate the current value (default 0.10)
    pub duplicate_probability: f64,

    /// Append one above, one middle and one below combining mark (default 0.40)
    pub diacritic_probability: f64,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            recase_probability: 0.10,
            replace_probability: 0.25,
            duplicate_probability: 0.10,
            diacritic_probability: 0.40,
        }
    }
}

/// Symbols used for whole-character replacement
pub const GLITCH_ALPHABET: &[char] = &[
    '#', '$', '%', '&', '*', '@', '!', '?', '/', '\\', '|', '~', '^', '+', '=', '<', '>', '0',
    '1', '3', '4', '7', '9', '§', '¤', '¿', '¡', '░', '▒', '▓', '█', '∆', 'Ø', 'ж',
];

/// Combining marks stacked above the base character
pub const DIACRITICS_ABOVE: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030F}', '\u{0311}', '\u{0313}',
    '\u{0314}', '\u{033D}', '\u{0346}', '\u{034A}', '\u{0351}', '\u{0357}',
];

/// Combining marks overlaid through the middle of the base character
pub const DIACRITICS_MIDDLE: &[char] = &[
    '\u{0334}', '\u{0335}', '\u{0336}', '\u{0337}', '\u{0338}', '\u{20D2}', '\u{20D3}',
];

/// Combining marks stacked below the base character
pub const DIACRITICS_BELOW: &[char] = &[
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031C}', '\u{031D}', '\u{031E}',
    '\u{031F}', '\u{0320}', '\u{0323}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0329}',
    '\u{032A}', '\u{032B}', '\u{032C}', '\u{032D}', '\u{0330}', '\u{0331}',
];

/// Per-token mutation policy for the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct MutationConfig {
    /// Negation chance grows by this much per un-negated verb (default 0.30)
    pub negation_step: f64,

    /// Chance of corrupting any non-first token (default 0.15)
    pub glitch_probability: f64,

    /// Chance of swapping a noun for another noun of the sentence (default 0.20)
    pub noun_swap_probability: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            negation_step: 0.30,
            glitch_probability: 0.15,
            noun_swap_probability: 0.20,
        }
    }
}

/// Typewriter timing and decorative framing
#[derive(Debug, Clone, PartialEq)]
pub struct TypingConfig {
    /// Delay after each typed character (default 35ms)
    pub char_delay: Duration,

    /// Delay after each erase action (default 12ms)
    pub erase_delay: Duration,

    /// Pause before an erase-and-rewrite (default 350ms)
    pub rewrite_pause: Duration,

    /// Pause while the preview stands (default 900ms)
    pub preview_pause: Duration,

    /// Words shown during the preview (default 10)
    pub preview_words: usize,

    /// Label of the processing indicator (default "processing")
    pub announce_label: String,

    /// Animated dots after the label (default 3)
    pub announce_dots: usize,

    /// Delay per dot (default 250ms)
    pub dot_delay: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(35),
            erase_delay: Duration::from_millis(12),
            rewrite_pause: Duration::from_millis(350),
            preview_pause: Duration::from_millis(900),
            preview_words: 10,
            announce_label: "processing".to_string(),
            announce_dots: 3,
            dot_delay: Duration::from_millis(250),
        }
    }
}

impl TypingConfig {
    /// All delays zeroed, for tests and piped output
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            erase_delay: Duration::ZERO,
            rewrite_pause: Duration::ZERO,
            preview_pause: Duration::ZERO,
            dot_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Remote antonym lookup (Datamuse-compatible endpoint)
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Endpoint URL (default https://api.datamuse.com/words)
    pub base_url: String,

    /// Candidates requested per lookup (default 10)
    pub max_results: usize,

    /// Request timeout (default 3s)
    pub timeout: Duration,

    /// Skip remote lookups entirely
    pub offline: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.datamuse.com/words".to_string(),
            max_results: 10,
            timeout: Duration::from_secs(3),
            offline: false,
        }
    }
}

/// Sentence generation through an OpenAI-compatible chat endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// API key; empty means sentences are echoed from input instead
    pub api_key: String,

    /// Chat completions URL
    pub api_url: String,

    /// Model name
    pub model: String,

    /// Max tokens for the reply (default 80)
    pub max_tokens: usize,

    /// Sampling temperature (default 0.9)
    pub temperature: f32,

    /// Request timeout (default 20s)
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("CONTRARIAN_API_KEY").unwrap_or_default(),
            api_url: std::env::var("CONTRARIAN_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            model: std::env::var("CONTRARIAN_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_tokens: 80,
            temperature: 0.9,
            timeout: Duration::from_secs(20),
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub glitch: GlitchConfig,
    pub mutation: MutationConfig,
    pub typing: TypingConfig,
    pub resolver: ResolverConfig,
    pub completion: CompletionConfig,
    /// Seed for the shared random source; `None` seeds from entropy
    pub seed: Option<u64>,
}
