//! contrarian: a glitch typewriter.
//!
//! Sentences are classified into verb phrases, nouns, adjectives and the
//! rest, then typed out one grapheme at a time while verbs get negated,
//! adjectives flipped to antonyms, nouns swapped and random tokens
//! corrupted, each mutation shown as an on-screen erase and rewrite.

pub mod app;
pub mod engine;
pub mod input;
pub mod rendering;
pub mod repl;
