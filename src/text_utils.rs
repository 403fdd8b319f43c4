// @module: Caption text utilities

// Tag stripping and whitespace collapsing are written as plain character
// scans so cleanup behavior stays exact and auditable.

/// Check whether a character counts as part of a word.
/// Word characters are Unicode letters, digits and the underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterate over the word tokens of a text span.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Count the word tokens of a text span.
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

// @strips: Angle-bracket markup tags from caption text
// A tag is '<', at least one non-'>' character, then '>'. Anything else
// (an unclosed '<', an empty '<>') is kept as literal text.
pub fn strip_markup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut cleaned = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<' {
            if let Some(offset) = chars[i + 1..].iter().position(|&c| c == '>') {
                if offset > 0 {
                    // Skip '<', the tag body and '>'
                    i += offset + 2;
                    continue;
                }
            }
        }
        cleaned.push(chars[i]);
        i += 1;
    }

    cleaned
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            // Leading whitespace is dropped, inner runs become one space
            pending_space = !collapsed.is_empty();
        } else {
            if pending_space {
                collapsed.push(' ');
                pending_space = false;
            }
            collapsed.push(c);
        }
    }

    collapsed
}

/// Normalize raw cue text: strip markup tags, then collapse whitespace.
pub fn normalize_text(raw: &str) -> String {
    collapse_whitespace(&strip_markup(raw))
}
