//! Keyword extraction for the daily summary.
//!
//! Two paths, chosen by dominant script:
//!
//! - Whitespace-delimited text goes through a lightweight part-of-speech
//!   tagger (lexicon plus suffix heuristics) and keeps adjective-tagged
//!   tokens in their original order, capped at 5.
//! - Non-whitespace-delimited text (kana or Han dominant) is segmented by a
//!   script-aware tokenizer; noun-tagged runs are kept, sorted by character
//!   length descending, capped at 5.
//!
//! Any tokenizer/tagger pair that preserves this tagged-class-then-cap-5
//! contract is an acceptable substitute.

use super::script;

/// Maximum number of keywords in a summary line.
pub const MAX_KEYWORDS: usize = 5;

/// Adjectives the suffix heuristics would miss. Must stay sorted for the
/// binary search.
const ADJECTIVE_LEXICON: &[&str] = &[
    "angry", "bad", "bright", "busy", "calm", "cold", "cozy", "dark", "fine", "good", "great",
    "happy", "hard", "hot", "kind", "lazy", "long", "loud", "new", "nice", "old", "proud",
    "quiet", "sad", "short", "slow", "small", "soft", "sunny", "sweet", "tired", "warm",
];

/// Suffixes that mark English adjectives. Short words are exempted so that
/// nouns like "day" or "wish" don't slip through on a coincidental ending.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ive", "less", "able", "ible", "ish", "al", "ic", "ant", "ent",
];

fn is_adjective(word: &str) -> bool {
    if ADJECTIVE_LEXICON.binary_search(&word).is_ok() {
        return true;
    }
    word.len() >= 5
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| word.ends_with(suffix))
}

/// Extracts up to [`MAX_KEYWORDS`] keywords from an entry text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if script::is_non_space_delimited(text) {
        extract_cjk_nouns(text)
    } else {
        extract_adjectives(text)
    }
}

/// Whitespace path: adjective-tagged tokens in original order.
fn extract_adjectives(text: &str) -> Vec<String> {
    let mut keywords = Vec::new();

    for token in text.split_whitespace() {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if is_adjective(&word) {
            keywords.push(word);
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }

    keywords
}

/// Script-aware path: contiguous same-script runs stand in for tokens.
///
/// Han and Katakana runs are tagged as nouns (content words); Hiragana runs
/// are overwhelmingly particles and inflections and are dropped. Nouns are
/// sorted by character length descending (stable, so equal-length runs keep
/// text order) and capped.
fn extract_cjk_nouns(text: &str) -> Vec<String> {
    #[derive(PartialEq, Clone, Copy)]
    enum Run {
        Han,
        Katakana,
        Other,
    }

    fn run_of(ch: char) -> Run {
        if script::is_han(ch) {
            Run::Han
        } else if script::is_kana(ch) && !('\u{3040}'..='\u{309F}').contains(&ch) {
            Run::Katakana
        } else {
            Run::Other
        }
    }

    let mut nouns: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_run = Run::Other;

    for ch in text.chars() {
        let run = run_of(ch);
        if run == current_run && run != Run::Other {
            current.push(ch);
            continue;
        }
        if !current.is_empty() {
            nouns.push(std::mem::take(&mut current));
        }
        if run != Run::Other {
            current.push(ch);
        }
        current_run = run;
    }
    if !current.is_empty() {
        nouns.push(current);
    }

    nouns.sort_by_key(|noun| std::cmp::Reverse(noun.chars().count()));
    nouns.truncate(MAX_KEYWORDS);
    nouns
}
