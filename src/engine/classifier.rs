//! Sentence classification into verb phrases, nouns, adjectives and the rest.
//!
//! Three passes over the word list, each a pure function of the previous:
//! contraction expansion, per-word tagging with neighbour context, and a
//! partition of word indices into verb-phrase spans and singletons.

use super::lexicon;
use super::token::{closes_phrase, extract_punctuation, Token, TokenKind};
use std::ops::Range;

/// Anything that can split a sentence into an ordered token list.
///
/// Implementations must cover every normalized word exactly once and return
/// tokens in ascending `position` order.
pub trait Classifier {
    fn classify(&self, sentence: &str) -> Vec<Token>;
}

/// Rule-based classifier backed by the built-in lexicon
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for LexiconClassifier {
    fn classify(&self, sentence: &str) -> Vec<Token> {
        let words = normalize(sentence);
        if words.is_empty() {
            return Vec::new();
        }

        let tags = tag_words(&words);
        let closes: Vec<bool> = words.iter().map(|w| closes_phrase(w)).collect();

        partition(&tags, &closes)
            .into_iter()
            .map(|span| match span {
                Span::Phrase(range) => {
                    Token::new(TokenKind::Verb, words[range.clone()].join(" "), range.start)
                }
                Span::Single(index) => Token::new(tags[index].kind(), words[index].clone(), index),
            })
            .collect()
    }
}

/// Word sequence the classifier operates on, contractions expanded
pub fn normalize(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().flat_map(expand_contraction).collect()
}

const IRREGULAR_CONTRACTIONS: &[(&str, &[&str])] = &[
    ("won't", &["will", "not"]),
    ("can't", &["can", "not"]),
    ("cannot", &["can", "not"]),
    ("shan't", &["shall", "not"]),
    ("ain't", &["is", "not"]),
    ("let's", &["let", "us"]),
];

const CONTRACTION_SUFFIXES: &[(&str, &str)] = &[
    ("n't", "not"),
    ("'re", "are"),
    ("'ve", "have"),
    ("'ll", "will"),
    ("'d", "would"),
    ("'m", "am"),
];

/// Only these take `'s` as "is"; everything else is a possessive
const IS_CONTRACTING: &[&str] = &[
    "it", "he", "she", "that", "there", "here", "what", "who", "where", "how", "when", "why",
];

fn expand_contraction(word: &str) -> Vec<String> {
    let (core, punctuation) = extract_punctuation(word);
    let lowered = core.to_lowercase().replace('’', "'");

    let mut pieces: Vec<String> = if let Some((_, expansion)) =
        IRREGULAR_CONTRACTIONS.iter().find(|(c, _)| *c == lowered)
    {
        let mut pieces: Vec<String> = expansion.iter().map(|s| s.to_string()).collect();
        if core.chars().next().is_some_and(char::is_uppercase) {
            pieces[0] = capitalize(&pieces[0]);
        }
        pieces
    } else if let Some((stem, expansion)) = split_suffix(&lowered) {
        let stem_len = stem.chars().count();
        vec![core.chars().take(stem_len).collect(), expansion.to_string()]
    } else {
        vec![core]
    };

    if let Some(last) = pieces.last_mut() {
        last.push_str(&punctuation);
    }
    pieces.retain(|p| !p.is_empty());
    pieces
}

fn split_suffix(lowered: &str) -> Option<(&str, &'static str)> {
    for (suffix, expansion) in CONTRACTION_SUFFIXES {
        if let Some(stem) = lowered.strip_suffix(suffix) {
            if !stem.is_empty() {
                return Some((stem, expansion));
            }
        }
    }
    let stem = lowered.strip_suffix("'s")?;
    IS_CONTRACTING.contains(&stem).then_some((stem, "is"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lexical tag assigned to one word before phrase grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Auxiliary,
    Verb,
    Negation,
    Infinitive,
    Adverb,
    Noun,
    Adjective,
    Determiner,
    Pronoun,
    Function,
}

impl Tag {
    fn joins_phrase(self) -> bool {
        matches!(
            self,
            Tag::Auxiliary | Tag::Verb | Tag::Negation | Tag::Infinitive | Tag::Adverb
        )
    }

    fn heads_phrase(self) -> bool {
        matches!(self, Tag::Auxiliary | Tag::Verb)
    }

    /// Token kind for a word left outside any verb phrase
    fn kind(self) -> TokenKind {
        match self {
            Tag::Noun => TokenKind::Noun,
            Tag::Adjective => TokenKind::Adjective,
            _ => TokenKind::Other,
        }
    }
}

struct Context<'a> {
    prev: Option<Tag>,
    prev_word: Option<&'a str>,
    next_word: Option<&'a str>,
    first: bool,
    punctuated: bool,
}

impl Context<'_> {
    fn follows_nominal_marker(&self) -> bool {
        matches!(self.prev, Some(Tag::Determiner | Tag::Adjective))
    }

    fn follows_subject(&self) -> bool {
        self.prev == Some(Tag::Pronoun) && self.prev_word.is_some_and(lexicon::is_subject_pronoun)
    }

    /// Position where a verb reading is expected
    fn verb_slot(&self) -> bool {
        matches!(
            self.prev,
            Some(Tag::Auxiliary | Tag::Infinitive | Tag::Negation | Tag::Adverb)
        ) || self.follows_subject()
    }

    fn next_is_noun(&self) -> bool {
        self.next_word
            .is_some_and(|w| lexicon::is_noun(w) && !lexicon::is_function_word(w))
    }
}

pub(crate) fn tag_words(words: &[String]) -> Vec<Tag> {
    let forms: Vec<String> = words.iter().map(|w| lexicon::lookup_form(w)).collect();
    let mut tags: Vec<Tag> = Vec::with_capacity(words.len());

    for (i, form) in forms.iter().enumerate() {
        let context = Context {
            prev: tags.last().copied(),
            prev_word: i.checked_sub(1).map(|j| forms[j].as_str()),
            next_word: forms.get(i + 1).map(String::as_str),
            first: i == 0,
            punctuated: closes_phrase(&words[i]),
        };
        tags.push(tag_word(form, &context));
    }

    tags
}

fn tag_word(word: &str, ctx: &Context) -> Tag {
    if !word.chars().any(char::is_alphabetic) {
        return Tag::Function;
    }
    if word == "not" {
        return Tag::Negation;
    }
    if word == "to" {
        let verb_follows = ctx.next_word.is_some_and(|next| {
            (lexicon::is_verb(next) && !lexicon::is_function_word(next))
                || (lexicon::is_auxiliary(next) && !MODALS.contains(&next))
        });
        return if verb_follows && !ctx.punctuated {
            Tag::Infinitive
        } else {
            Tag::Function
        };
    }
    if lexicon::is_auxiliary(word) {
        return Tag::Auxiliary;
    }
    if lexicon::is_determiner(word) {
        return Tag::Determiner;
    }
    if lexicon::is_pronoun(word) {
        return Tag::Pronoun;
    }
    if lexicon::is_preposition(word) || lexicon::is_conjunction(word) {
        return Tag::Function;
    }

    let verb = lexicon::is_verb(word);
    let noun = lexicon::is_noun(word);
    let adjective = lexicon::is_adjective(word);
    let adverb = lexicon::is_adverb(word);

    if adverb && !verb && !noun && !adjective {
        return Tag::Adverb;
    }
    if verb && !ctx.follows_nominal_marker() && (ctx.verb_slot() || ctx.prev == Some(Tag::Noun))
    {
        return Tag::Verb;
    }
    if adjective && ctx.next_is_noun() {
        return Tag::Adjective;
    }
    if noun && ctx.follows_nominal_marker() {
        return Tag::Noun;
    }
    if adjective && matches!(ctx.prev, Some(Tag::Auxiliary | Tag::Adverb | Tag::Negation)) {
        return Tag::Adjective;
    }
    if verb && ctx.first && !noun && !adjective {
        return Tag::Verb;
    }
    if noun {
        return Tag::Noun;
    }
    if adjective {
        return Tag::Adjective;
    }
    if verb {
        return if ctx.follows_nominal_marker() {
            Tag::Noun
        } else {
            Tag::Verb
        };
    }

    tag_unknown(word, ctx)
}

/// Auxiliaries that never follow an infinitive "to"
const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ought",
];

const NOUN_ENDINGS: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ship", "ance", "ence", "hood", "dom", "ist",
];

const ADJECTIVE_ENDINGS: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary",
];

/// Suffix heuristics for words the lexicon does not know; defaults to noun.
fn tag_unknown(word: &str, ctx: &Context) -> Tag {
    if word.ends_with("ing") || word.ends_with("ed") {
        if ctx.verb_slot() || matches!(ctx.prev, Some(Tag::Noun | Tag::Pronoun)) {
            return Tag::Verb;
        }
        if ctx.follows_nominal_marker() {
            return if word.ends_with("ed") {
                Tag::Adjective
            } else {
                Tag::Noun
            };
        }
    }
    if NOUN_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return Tag::Noun;
    }
    if ADJECTIVE_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return Tag::Adjective;
    }
    if matches!(ctx.prev, Some(Tag::Auxiliary | Tag::Infinitive)) || ctx.follows_subject() {
        return Tag::Verb;
    }
    Tag::Noun
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Span {
    Phrase(Range<usize>),
    Single(usize),
}

/// Partitions word indices into verb-phrase spans and singletons.
///
/// A phrase is a maximal run of phrase-capable tags that contains a verb or
/// an auxiliary; trailing adverbs are released as singletons and a word with
/// closing punctuation ends the run.
pub(crate) fn partition(tags: &[Tag], closes: &[bool]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tags.len() {
        if !tags[i].joins_phrase() {
            spans.push(Span::Single(i));
            i += 1;
            continue;
        }

        let mut end = i;
        while end < tags.len() && tags[end].joins_phrase() {
            end += 1;
            if closes[end - 1] {
                break;
            }
        }

        let mut last = end;
        while last > i && tags[last - 1] == Tag::Adverb {
            last -= 1;
        }

        if tags[i..last].iter().any(|t| t.heads_phrase()) {
            spans.push(Span::Phrase(i..last));
            spans.extend((last..end).map(Span::Single));
            i = end;
        } else {
            spans.push(Span::Single(i));
            i += 1;
        }
    }

    spans
}
