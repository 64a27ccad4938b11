/// Text normalization — canonicalizes raw text into a clean word set.

use rustc_hash::FxHashSet;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("no text provided for normalization")]
    NoInput,
    #[error("normalization produced no usable words")]
    NoUsableWords,
}

/// Normalize raw text into the set of unique candidate words.
///
/// Applies NFKD decomposition and lowercasing so diacritic letters survive as
/// base-letter plus combining-mark pairs, canonicalizes curly apostrophe
/// variants, treats runs of two or more hyphens as separators, and strips
/// every character that is not a letter, combining mark, apostrophe, or
/// hyphen. Tokens are trimmed of boundary hyphens and kept only when longer
/// (in chars) than `context_length`.
pub fn normalize_words(
    text: &str,
    context_length: usize,
) -> Result<FxHashSet<String>, NormalizeError> {
    if text.trim().is_empty() {
        return Err(NormalizeError::NoInput);
    }

    let text: String = text.nfkd().collect::<String>().to_lowercase();
    let text: String = text
        .chars()
        .map(|c| match c {
            // LEFT/RIGHT SINGLE QUOTATION MARK
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();
    let text = collapse_hyphen_runs(&text);

    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_alphabetic() || is_combining_mark(c) || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut words = FxHashSet::default();
    for token in cleaned.split_whitespace() {
        let token = token.trim_matches('-');
        if token.chars().count() > context_length {
            words.insert(token.to_string());
        }
    }

    if words.is_empty() {
        return Err(NormalizeError::NoUsableWords);
    }
    Ok(words)
}

/// Replace each run of two or more hyphens with a single space.
///
/// Em/en-dash-style separators are word boundaries, not word content; single
/// hyphens are left alone so compound words survive.
fn collapse_hyphen_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' && chars.peek() == Some(&'-') {
            while chars.peek() == Some(&'-') {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}
