/// Coarse word class used to pick a mutation for each token
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Verb,
    Noun,
    Adjective,
    Other,
}

/// A classified slice of a sentence.
///
/// Verb tokens may span several words ("is not running"); every other kind
/// holds exactly one word.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Surface text, trailing punctuation included.
    pub text: String,
    /// Index of the token's first word in the normalized word sequence.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Number of underlying words this token covers
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Splits trailing punctuation off a word: `"eagerly."` → `("eagerly", ".")`.
pub fn extract_punctuation(word: &str) -> (String, String) {
    if word.is_empty() {
        return (String::new(), String::new());
    }

    let mut chars: Vec<char> = word.chars().collect();
    let mut punctuation_chars = Vec::new();

    while let Some(&last_char) = chars.last() {
        if is_trailing_punctuation(last_char) {
            punctuation_chars.push(last_char);
            chars.pop();
        } else {
            break;
        }
    }

    punctuation_chars.reverse();

    (
        chars.into_iter().collect(),
        punctuation_chars.into_iter().collect(),
    )
}

/// True if the word ends with punctuation that closes a phrase
pub fn closes_phrase(word: &str) -> bool {
    word.chars()
        .rev()
        .take_while(|&c| is_trailing_punctuation(c))
        .any(|c| is_sentence_terminator(c) || is_clause_break(c))
}

fn is_trailing_punctuation(c: char) -> bool {
    is_sentence_terminator(c)
        || is_clause_break(c)
        || matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

fn is_clause_break(c: char) -> bool {
    c == ',' || c == ';' || c == ':'
}
