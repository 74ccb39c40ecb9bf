//! Stochastic per-character corruption.
//!
//! Each character runs through four independent trials in order (recase,
//! replace, duplicate, diacritic stack), each acting on the output of the
//! previous one. Effects compound within a character and never cross into
//! its neighbours.

use super::config::{
    GlitchConfig, DIACRITICS_ABOVE, DIACRITICS_BELOW, DIACRITICS_MIDDLE, GLITCH_ALPHABET,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// One input character after corruption, with the trials that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptedChar {
    pub text: String,
    pub recased: bool,
    pub replaced: bool,
    pub duplicated: bool,
    pub stacked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Glitcher {
    config: GlitchConfig,
}

impl Glitcher {
    pub fn new(config: GlitchConfig) -> Self {
        Self { config }
    }

    /// Corrupts every character of `word`. Never shorter than the input.
    pub fn glitch<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        word.chars()
            .map(|c| self.corrupt_char(c, rng).text)
            .collect()
    }

    pub fn corrupt_char<R: Rng + ?Sized>(&self, c: char, rng: &mut R) -> CorruptedChar {
        let mut value = c.to_string();

        let recased = rng.gen_bool(self.config.recase_probability);
        if recased {
            value = if rng.gen_bool(0.5) {
                value.to_uppercase()
            } else {
                value.to_lowercase()
            };
        }

        let replaced = rng.gen_bool(self.config.replace_probability);
        if replaced {
            if let Some(symbol) = GLITCH_ALPHABET.choose(rng) {
                value = symbol.to_string();
            }
        }

        let duplicated = rng.gen_bool(self.config.duplicate_probability);
        if duplicated {
            value = value.repeat(2);
        }

        let stacked = rng.gen_bool(self.config.diacritic_probability);
        if stacked {
            for pool in [DIACRITICS_ABOVE, DIACRITICS_MIDDLE, DIACRITICS_BELOW] {
                if let Some(mark) = pool.choose(rng) {
                    value.push(*mark);
                }
            }
        }

        CorruptedChar {
            text: value,
            recased,
            replaced,
            duplicated,
            stacked,
        }
    }
}
