//! Category name cleaning.
//!
//! The surface patterns capture generously; the cleaner strips what the
//! capture dragged along: punctuation, filler words, stopwords and tokens
//! that look like comparative/adverbial noise words.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::locale::LocaleProfile;

lazy_static! {
    // Anything that is not a letter, digit, whitespace or hyphen.
    static ref NON_NAME: Regex = Regex::new(r"[^\w\s\-а-яА-ЯёЁ]").unwrap();

    static ref SINGLE_LETTER: Regex = Regex::new(r"\b[а-яА-Яa-z]\b").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Cleans raw category strings captured by the surface patterns.
pub struct CategoryCleaner {
    stopwords: HashSet<String>,
    detail_words: Vec<String>,
    noise_suffixes: Vec<String>,
}

impl CategoryCleaner {
    /// Build a cleaner from a locale profile.
    pub fn new(locale: &LocaleProfile) -> Self {
        Self {
            stopwords: locale.stopwords.iter().map(|w| w.to_lowercase()).collect(),
            detail_words: locale.detail_words.iter().map(|w| w.to_lowercase()).collect(),
            noise_suffixes: locale.noise_suffixes.clone(),
        }
    }

    /// Clean a raw category string. Returns a possibly empty string; the
    /// validity filter downstream decides whether the result survives.
    pub fn clean(&self, raw: &str) -> String {
        // Icon glyphs and stray punctuation become spaces.
        let name = NON_NAME.replace_all(raw, " ");
        let name = name.trim();

        // Filler words ("Аптеки Подробнее") are removed wherever they appear.
        let lower = name.to_lowercase();
        let name = if self.detail_words.iter().any(|word| lower.contains(word)) {
            name.split_whitespace()
                .filter(|word| !self.detail_words.contains(&word.to_lowercase()))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            name.to_string()
        };

        let name = name
            .split_whitespace()
            .filter(|word| self.keep_token(word))
            .collect::<Vec<_>>()
            .join(" ");

        // One more pass for stray single letters, then collapse.
        let name = SINGLE_LETTER.replace_all(&name, "");
        let name = WHITESPACE.replace_all(&name, " ");
        name.trim().to_string()
    }

    /// A token survives unless it is a stopword, a single character, or
    /// ends in a noise suffix. The suffix check is a heuristic, not
    /// morphology: a genuine category word with such an ending is lost too.
    fn keep_token(&self, word: &str) -> bool {
        let lower = word.to_lowercase();

        if self.stopwords.contains(&lower) {
            return false;
        }
        if word.chars().count() <= 1 {
            return false;
        }
        !self.noise_suffixes.iter().any(|suffix| lower.ends_with(suffix))
    }
}
