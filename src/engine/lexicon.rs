//! Built-in English word lists for the rule-based classifier.
//!
//! Open-class lookups (`is_verb`, `is_noun`, `is_adjective`) also try the
//! usual inflection stems, so "runs", "running" and "ran" all resolve to the
//! verb "run".

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref AUXILIARIES: HashSet<&'static str> = [
        "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have",
        "has", "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
        "ought",
    ]
    .into_iter()
    .collect();

    static ref DETERMINERS: HashSet<&'static str> = [
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "no", "every", "each", "either", "neither", "all", "both",
        "few", "many", "much", "several", "another", "other", "such", "what", "which", "whose",
    ]
    .into_iter()
    .collect();

    static ref PRONOUNS: HashSet<&'static str> = [
        "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        "who", "whom", "someone", "something", "anyone", "anything", "everyone", "everything",
        "nobody", "nothing", "mine", "yours", "hers", "ours", "theirs", "there", "here",
    ]
    .into_iter()
    .collect();

    static ref SUBJECT_PRONOUNS: HashSet<&'static str> =
        ["i", "you", "he", "she", "it", "we", "they", "who"].into_iter().collect();

    static ref PREPOSITIONS: HashSet<&'static str> = [
        "about", "above", "across", "after", "against", "along", "among", "around", "at",
        "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
        "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off",
        "on", "onto", "out", "outside", "over", "past", "through", "throughout", "toward",
        "towards", "under", "underneath", "until", "up", "upon", "with", "within", "without",
        "via",
    ]
    .into_iter()
    .collect();

    static ref CONJUNCTIONS: HashSet<&'static str> = [
        "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
        "unless", "since", "whereas", "than", "as", "when", "where", "whether", "whenever",
        "wherever", "how", "why",
    ]
    .into_iter()
    .collect();

    static ref ADVERBS: HashSet<&'static str> = [
        "always", "never", "often", "sometimes", "usually", "rarely", "seldom", "ever", "again",
        "already", "still", "just", "only", "even", "also", "too", "very", "quite", "rather",
        "almost", "soon", "now", "then", "today", "tomorrow", "yesterday", "tonight", "away",
        "back", "forward", "together", "apart", "maybe", "perhaps", "indeed", "once", "twice",
        "everywhere", "nowhere", "somewhere", "anywhere", "ago", "later", "instead", "enough",
        "forever", "barely", "hardly", "truly",
    ]
    .into_iter()
    .collect();

    static ref VERBS: HashSet<&'static str> = [
        // base forms
        "accept", "add", "admire", "agree", "allow", "answer", "appear", "arrive", "ask",
        "attack", "avoid", "bake", "beat", "become", "begin", "believe", "belong", "bend",
        "bite", "bleed", "blow", "boil", "borrow", "break", "breathe", "bring", "build", "burn",
        "buy", "call", "carry", "catch", "cause", "change", "chase", "check", "choose", "clean",
        "climb", "close", "collect", "come", "cook", "cost", "count", "cover", "crawl", "create",
        "cross", "cry", "cut", "dance", "dare", "decide", "deliver", "destroy", "dig",
        "disappear", "discover", "dive", "draw", "dream", "dress", "drink", "drive", "drop",
        "eat", "enjoy", "enter", "escape", "explain", "fail", "fall", "feed", "feel", "fight",
        "fill", "find", "finish", "fix", "float", "fly", "follow", "forget", "forgive",
        "freeze", "gather", "get", "give", "glow", "go", "grab", "grow", "guess", "hang",
        "hate", "hear", "help", "hide", "hit", "hold", "hope", "hunt", "hurry", "hurt",
        "imagine", "invite", "jump", "keep", "kick", "kill", "kiss", "know", "laugh", "lead",
        "learn", "leave", "lend", "let", "lie", "lift", "like", "listen", "live", "look",
        "lose", "love", "make", "marry", "mean", "meet", "melt", "miss", "move", "need",
        "notice", "obey", "offer", "open", "order", "own", "paint", "pass", "pay", "pick",
        "plan", "plant", "play", "pray", "prefer", "prepare", "press", "pretend", "promise",
        "protect", "pull", "push", "put", "reach", "read", "realize", "receive", "remember",
        "repeat", "reply", "rest", "return", "ride", "ring", "rise", "roar", "roll", "run",
        "rush", "save", "say", "scream", "search", "see", "seem", "sell", "send", "serve",
        "set", "shake", "share", "shine", "shoot", "shout", "show", "shut", "sing", "sink",
        "sit", "sleep", "slide", "smell", "smile", "speak", "spend", "stand", "start", "stay",
        "steal", "step", "stop", "study", "swim", "take", "talk", "taste", "teach", "tear",
        "tell", "thank", "think", "throw", "touch", "travel", "trust", "try", "turn",
        "understand", "use", "visit", "wait", "wake", "walk", "want", "wander", "wash",
        "watch", "wave", "wear", "win", "wish", "wonder", "work", "worry", "write", "yell",
        // irregular past and participle forms
        "ate", "eaten", "began", "begun", "bit", "bitten", "blew", "blown", "broke", "broken",
        "brought", "built", "burnt", "bought", "caught", "chose", "chosen", "came", "done",
        "drew", "drawn", "dreamt", "drank", "drunk", "drove", "driven", "fell", "fallen", "fed",
        "felt", "fought", "found", "flew", "flown", "forgot", "forgotten", "forgave", "froze",
        "frozen", "got", "gotten", "gave", "given", "went", "gone", "grew", "grown", "hung",
        "heard", "hid", "hidden", "held", "kept", "knew", "known", "laid", "led", "left",
        "lent", "lay", "lain", "lost", "made", "meant", "met", "paid", "rode", "ridden", "rang",
        "rung", "rose", "risen", "ran", "said", "saw", "seen", "sold", "sent", "shook",
        "shaken", "shone", "shot", "shown", "sang", "sung", "sank", "sunk", "sat", "slept",
        "slid", "spoke", "spoken", "spent", "stood", "stole", "stolen", "swam", "swum", "took",
        "taken", "taught", "tore", "torn", "told", "thought", "threw", "thrown", "understood",
        "woke", "woken", "wore", "worn", "won", "wrote", "written",
    ]
    .into_iter()
    .collect();

    static ref NOUNS: HashSet<&'static str> = [
        "time", "year", "people", "way", "day", "man", "men", "woman", "women", "child",
        "children", "world", "life", "hand", "part", "place", "case", "week", "company",
        "system", "program", "question", "work", "government", "number", "night", "point",
        "home", "water", "room", "mother", "father", "area", "money", "story", "fact", "month",
        "lot", "right", "study", "book", "eye", "job", "word", "business", "issue", "side",
        "kind", "head", "house", "service", "friend", "power", "hour", "game", "line", "end",
        "member", "law", "car", "city", "community", "name", "team", "minute", "idea", "kid",
        "body", "information", "parent", "face", "level", "office", "door", "health", "person",
        "art", "war", "history", "party", "result", "change", "morning", "reason", "girl",
        "boy", "moment", "air", "teacher", "force", "dog", "cat", "bird", "fish", "tree", "sun",
        "moon", "star", "sky", "sea", "ocean", "river", "mountain", "road", "street", "garden",
        "forest", "field", "flower", "rain", "snow", "wind", "fire", "light", "danger",
        "darkness", "shadow", "dream", "heart", "mind", "soul", "voice", "song", "music",
        "machine", "computer", "phone", "screen", "window", "wall", "floor", "table", "chair",
        "bed", "food", "bread", "apple", "coffee", "tea", "town", "village", "country", "king",
        "queen", "god", "ghost", "monster", "robot", "truth", "lie", "love", "hope", "fear",
        "anger", "joy", "silence", "noise", "storm", "thunder", "ship", "boat", "train",
        "plane", "school", "store", "market", "army", "enemy", "stranger", "crowd", "path",
        "journey", "future", "past", "memory", "secret", "key", "box", "letter", "message",
        "signal", "answer", "universe", "planet", "stone", "rock", "glass", "dust", "blood",
        "bone", "smile", "tear", "hope", "edge", "void", "sound", "color", "colour", "space",
    ]
    .into_iter()
    .collect();

    static ref ADJECTIVES: HashSet<&'static str> = [
        "good", "new", "first", "last", "long", "great", "little", "own", "old", "right", "big",
        "high", "different", "small", "large", "next", "early", "young", "important", "public",
        "bad", "same", "able", "happy", "sad", "angry", "calm", "quiet", "loud", "bright",
        "dark", "cold", "hot", "warm", "cool", "wet", "dry", "soft", "hard", "heavy", "light",
        "strong", "weak", "fast", "slow", "rich", "poor", "clean", "dirty", "full", "empty",
        "beautiful", "ugly", "pretty", "tall", "short", "wide", "narrow", "deep", "shallow",
        "kind", "cruel", "brave", "afraid", "alive", "dead", "true", "false", "real", "fake",
        "free", "safe", "dangerous", "strange", "familiar", "simple", "easy", "difficult",
        "closed", "sharp", "dull", "sweet", "bitter", "red", "blue", "green", "yellow",
        "black", "white", "gray", "grey", "brown", "purple", "orange", "golden", "silent",
        "lonely", "lovely", "friendly", "silly", "holy", "likely", "daily", "final", "huge",
        "tiny", "ancient", "modern", "wild", "gentle", "proud", "humble", "honest", "eager",
        "careful", "careless", "ready", "sure", "certain", "clear", "smart", "stupid", "wise",
        "foolish", "late", "ugly", "endless", "hollow", "bold", "shy",
    ]
    .into_iter()
    .collect();
}

const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ied", "y"),
    ("ed", ""),
    ("d", ""),
    ("ing", ""),
    ("ing", "e"),
];

const NOUN_SUFFIXES: &[(&str, &str)] = &[("ies", "y"), ("es", ""), ("s", "")];

const ADJECTIVE_SUFFIXES: &[(&str, &str)] = &[
    ("iest", "y"),
    ("ier", "y"),
    ("est", ""),
    ("er", ""),
    ("st", ""),
    ("r", ""),
];

/// Candidate base forms for `word` under the given suffix rules.
///
/// A doubled final consonant is also undone ("running" → "runn" → "run").
fn stems(word: &str, rules: &[(&str, &str)]) -> Vec<String> {
    let mut stems = Vec::new();
    for (suffix, replacement) in rules {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.chars().count() < 2 {
            continue;
        }
        stems.push(format!("{}{}", stem, replacement));

        let mut chars = stem.chars().rev();
        if let (Some(last), Some(before)) = (chars.next(), chars.next()) {
            if last == before && !"aeiou".contains(last) {
                let undoubled: String = stem.chars().take(stem.chars().count() - 1).collect();
                stems.push(undoubled);
            }
        }
    }
    stems
}

fn lookup(word: &str, table: &HashSet<&'static str>, rules: &[(&str, &str)]) -> bool {
    table.contains(word) || stems(word, rules).iter().any(|s| table.contains(s.as_str()))
}

pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(word)
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(word)
}

pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains(word)
}

pub fn is_subject_pronoun(word: &str) -> bool {
    SUBJECT_PRONOUNS.contains(word)
}

pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(word)
}

pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(word)
}

/// Closed-class words that never start a verb, noun or adjective reading
pub fn is_function_word(word: &str) -> bool {
    is_determiner(word) || is_pronoun(word) || is_preposition(word) || is_conjunction(word)
}

/// Listed adverbs plus any `-ly` word that is not a listed adjective
pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(word)
        || (word.chars().count() > 3 && word.ends_with("ly") && !ADJECTIVES.contains(word))
}

pub fn is_verb(word: &str) -> bool {
    lookup(word, &VERBS, VERB_SUFFIXES)
}

pub fn is_noun(word: &str) -> bool {
    lookup(word, &NOUNS, NOUN_SUFFIXES)
}

pub fn is_adjective(word: &str) -> bool {
    lookup(word, &ADJECTIVES, ADJECTIVE_SUFFIXES)
}

/// Lowercased lookup form: surrounding punctuation and a possessive `'s` removed
pub fn lookup_form(word: &str) -> String {
    let lowered = word.to_lowercase().replace('’', "'");
    let trimmed = lowered.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
    let trimmed = trimmed.trim_matches('\'');
    trimmed.strip_suffix("'s").unwrap_or(trimmed).to_string()
}
