//! Verb-phrase negation.
//!
//! A fixed decision list; the first rule that matches produces the result.
//! Applying it twice restores the original phrase for the removal,
//! infinitive, auxiliary and adverb rules. The "ing" splice, the "isn't"
//! rewrite and the do-support default are one-way.

use super::lexicon;
use super::token::extract_punctuation;

/// Which rule of the decision list produced a negation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegationRule {
    RemovedNot,
    Infinitive,
    Auxiliary,
    Adverb,
    Continuous,
    IsContraction,
    DoSupport,
    Unchanged,
}

/// Negates `phrase`, or un-negates it if it already contains "not".
pub fn negate(phrase: &str) -> String {
    negate_with_rule(phrase).0
}

/// Like [`negate`], also reporting the rule that fired.
pub fn negate_with_rule(phrase: &str) -> (String, NegationRule) {
    let (core, punctuation) = extract_punctuation(phrase.trim());
    let (negated, rule) = apply_rules(&core);
    (format!("{}{}", negated, punctuation), rule)
}

fn apply_rules(phrase: &str) -> (String, NegationRule) {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    if let Some(index) = lowered.iter().position(|w| w == "not") {
        let mut kept = words.clone();
        kept.remove(index);
        return (kept.join(" "), NegationRule::RemovedNot);
    }

    if !phrase.chars().any(char::is_alphabetic) {
        return (phrase.to_string(), NegationRule::Unchanged);
    }

    if lowered.len() >= 2 && lowered[0] == "to" {
        return (format!("not {}", phrase), NegationRule::Infinitive);
    }

    // a bare trailing "is" is left for the "isn't" rewrite
    let last = lowered.len() - 1;
    let auxiliary = lowered
        .iter()
        .enumerate()
        .position(|(i, w)| lexicon::is_auxiliary(w) && !(i == last && w == "is"));
    if let Some(index) = auxiliary {
        return (insert_not_after(&words, index), NegationRule::Auxiliary);
    }

    if let Some(index) = lowered.iter().position(|w| lexicon::is_adverb(w)) {
        return (insert_not_after(&words, index), NegationRule::Adverb);
    }

    if phrase.contains("ing") {
        return (
            phrase.replacen("ing", "ing not", 1),
            NegationRule::Continuous,
        );
    }

    if let Some(index) = lowered.iter().position(|w| w == "is") {
        let mut rewritten: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        rewritten[index].push_str("n't");
        return (rewritten.join(" "), NegationRule::IsContraction);
    }

    match phrase.strip_suffix('s') {
        Some(stem) => (format!("doesn't {}", stem), NegationRule::DoSupport),
        None => (format!("don't {}", phrase), NegationRule::DoSupport),
    }
}

fn insert_not_after(words: &[&str], index: usize) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(words.len() + 1);
    out.extend_from_slice(&words[..=index]);
    out.push("not");
    out.extend_from_slice(&words[index + 1..]);
    out.join(" ")
}
