//! OCR text normalization.
//!
//! Screenshot OCR output mixes Cyrillic and Latin text with icon glyphs and
//! recognition noise. Normalization strips what the surface patterns can
//! never use and collapses whitespace so the patterns see one clean stream.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Everything outside the allow-list (word characters, %, basic
    // punctuation, whitespace, Cyrillic letters) becomes a space.
    static ref DISALLOWED: Regex =
        Regex::new(r"[^\w\s%\.,:;\-\+\*\&\(\)\[\]а-яА-ЯёЁ]").unwrap();

    // Isolated non-word token surrounded by whitespace.
    static ref ISOLATED_JUNK: Regex = Regex::new(r"\s[^\w%а-яА-ЯёЁ]\s").unwrap();

    // Single letter, with an optional trailing percent sign. The regex
    // crate has no lookahead, so the tail is captured instead and decides
    // whether the letter is kept.
    static ref SINGLE_LETTER: Regex = Regex::new(r"\b[а-яА-Яa-z]\b(\s*%)?").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize raw OCR output into a clean text stream.
///
/// Total function: always returns a (possibly empty) string.
pub fn normalize_text(text: &str) -> String {
    let text = DISALLOWED.replace_all(text, " ");
    let text = ISOLATED_JUNK.replace_all(&text, " ");

    // A lone letter is almost always OCR noise, not a word; keep it only
    // when a percent sign follows.
    let text = SINGLE_LETTER.replace_all(&text, |caps: &Captures| match caps.get(1) {
        Some(_) => caps[0].to_string(),
        None => " ".to_string(),
    });

    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
