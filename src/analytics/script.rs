//! Dominant-script detection.
//!
//! The analytics routines take one of two paths depending on whether the
//! entry text is written in a whitespace-delimited script. Whitespace-based
//! tagging degrades badly on logographic/agglutinative text, so kana or
//! Han-dominant text is routed to a script-aware tokenizer and a seeded
//! sentiment stub instead.

/// Returns `true` when the dominant script of `text` cannot be segmented into
/// words by whitespace.
///
/// Any kana at all marks the text as Japanese. Otherwise the text counts as
/// non-whitespace-delimited when Han characters outnumber alphabetic ones.
pub fn is_non_space_delimited(text: &str) -> bool {
    let mut han = 0usize;
    let mut alphabetic = 0usize;

    for ch in text.chars() {
        if is_kana(ch) {
            return true;
        }
        if is_han(ch) {
            han += 1;
        } else if ch.is_alphabetic() {
            alphabetic += 1;
        }
    }

    han > 0 && han >= alphabetic
}

/// Hiragana or Katakana (including the halfwidth Katakana block).
pub fn is_kana(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'          // Hiragana
        | '\u{30A0}'..='\u{30FF}'        // Katakana
        | '\u{FF66}'..='\u{FF9D}')       // Halfwidth Katakana
}

/// CJK unified ideographs (the common block plus extension A).
pub fn is_han(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}
