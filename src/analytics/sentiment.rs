//! Sentence-level sentiment classification.
//!
//! Text on the whitespace-delimited path is split into sentences, each
//! sentence is scored with a continuous valence in `[-1, 1]` from a small
//! word-valence lexicon, and the average is bucketed into three labels.
//! Non-whitespace-delimited text gets a deterministic seeded label instead of
//! a content-derived one: the lexicon approach is unreliable there, and a
//! reproducible stub keeps the summary stable and testable.

use super::script;
use std::fmt;

/// The three sentiment buckets used by the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Balanced,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Balanced => "balanced",
            Sentiment::Negative => "negative",
        };
        write!(f, "{}", label)
    }
}

/// Ordered label list for the seeded path: `abs(seed) mod 3` indexes this.
const SEEDED_LABELS: [Sentiment; 3] = [
    Sentiment::Positive,
    Sentiment::Balanced,
    Sentiment::Negative,
];

/// Word valences in `[-1, 1]`. Matched case-insensitively after trimming
/// punctuation; unmatched words contribute nothing to a sentence's score.
const VALENCES: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("angry", -0.7),
    ("annoyed", -0.5),
    ("anxious", -0.6),
    ("awful", -0.9),
    ("bad", -0.5),
    ("beautiful", 0.7),
    ("bored", -0.3),
    ("calm", 0.3),
    ("content", 0.5),
    ("delighted", 0.8),
    ("disappointed", -0.6),
    ("dreadful", -0.9),
    ("excited", 0.7),
    ("exhausted", -0.4),
    ("fine", 0.1),
    ("frustrated", -0.6),
    ("fun", 0.6),
    ("glad", 0.6),
    ("good", 0.4),
    ("grateful", 0.7),
    ("great", 0.6),
    ("happy", 0.8),
    ("hate", -0.8),
    ("hopeful", 0.6),
    ("horrible", -0.9),
    ("joyful", 0.8),
    ("lonely", -0.6),
    ("love", 0.7),
    ("lovely", 0.7),
    ("miserable", -0.8),
    ("nervous", -0.5),
    ("nice", 0.5),
    ("nothing", -0.2),
    ("peaceful", 0.5),
    ("perfect", 0.8),
    ("pleasant", 0.6),
    ("proud", 0.6),
    ("relaxed", 0.4),
    ("relieved", 0.5),
    ("sad", -0.8),
    ("scared", -0.7),
    ("special", 0.3),
    ("stressed", -0.6),
    ("terrible", -0.9),
    ("tired", -0.3),
    ("upset", -0.6),
    ("wonderful", 0.9),
    ("worried", -0.5),
];

fn word_valence(word: &str) -> Option<f64> {
    let normalized = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    VALENCES
        .binary_search_by(|(w, _)| w.cmp(&normalized.as_str()))
        .ok()
        .map(|idx| VALENCES[idx].1)
}

/// Scores one sentence in `[-1, 1]`, or `None` when no word carries a valence.
fn sentence_score(sentence: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut matched = 0usize;

    for word in sentence.split_whitespace() {
        if let Some(valence) = word_valence(word) {
            total += valence;
            matched += 1;
        }
    }

    if matched == 0 {
        return None;
    }
    Some((total / matched as f64).clamp(-1.0, 1.0))
}

/// Average sentence sentiment for whitespace-delimited text.
///
/// Sentences are split on `.`, `!` and `?`; empty fragments and sentences with
/// no scorable word are skipped. Returns `None` when nothing scored.
pub fn text_score(text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut scored = 0usize;

    for sentence in text.split(['.', '!', '?']) {
        if sentence.trim().is_empty() {
            continue;
        }
        if let Some(score) = sentence_score(sentence) {
            total += score;
            scored += 1;
        }
    }

    if scored == 0 {
        return None;
    }
    Some(total / scored as f64)
}

/// Classifies the sentiment of an entry.
///
/// For non-whitespace-delimited text the label is chosen from
/// `abs(stable_seed) mod 3` over `[positive, balanced, negative]` - a
/// deliberate stub, not an omission: the same seed always yields the same
/// label. Otherwise the average sentence score `s` maps to negative when
/// `s <= -0.33`, balanced when `-0.33 < s <= 0.1`, positive when `s > 0.1`,
/// and balanced when no sentence yields a score.
pub fn classify_sentiment(text: &str, stable_seed: i64) -> Sentiment {
    if script::is_non_space_delimited(text) {
        let index = (stable_seed.unsigned_abs() % SEEDED_LABELS.len() as u64) as usize;
        return SEEDED_LABELS[index];
    }

    match text_score(text) {
        Some(s) if s <= -0.33 => Sentiment::Negative,
        Some(s) if s <= 0.1 => Sentiment::Balanced,
        Some(_) => Sentiment::Positive,
        None => Sentiment::Balanced,
    }
}
