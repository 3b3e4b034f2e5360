//! Regex word segmentation.
//!
//! A [`Tokenizer`] is an explicit configuration value: build one, adjust it
//! with the setters, then share it by reference. Mutation needs `&mut`, so it
//! can never race with a tokenization pass on another thread.

use std::{iter::FusedIterator, sync::LazyLock};

use regex::{Matches, Regex};
use thiserror::Error;
use tracing::debug;

/// Letters, spacing and non-spacing marks, underscore, apostrophe and hyphen.
pub const DEFAULT_PATTERN: &str = r"[\p{L}\p{Mc}\p{Mn}_'\-]+";

/// [`DEFAULT_PATTERN`] plus decimal digits.
pub const DIGITS_PATTERN: &str = r"[\p{L}\p{Mc}\p{Mn}\p{Nd}_'\-]+";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PATTERN).expect("default token pattern is valid"));
static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIGITS_PATTERN).expect("digits token pattern is valid"));

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("invalid token pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Splits normalized text into word tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    include_digits: bool,
    custom: Option<Regex>,
}

impl Tokenizer {
    /// Tokenizer using [`DEFAULT_PATTERN`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer using a custom pattern. Fails if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self, TokenizerError> {
        let mut tokenizer = Self::new();
        tokenizer.set_token_pattern(pattern)?;
        Ok(tokenizer)
    }

    /// Include Unicode decimal digits in the default token class.
    ///
    /// Has no visible effect while a custom pattern is installed.
    pub fn set_include_digits(&mut self, include: bool) {
        self.include_digits = include;
    }

    pub fn include_digits(&self) -> bool {
        self.include_digits
    }

    /// Replace the default token class with `pattern`.
    ///
    /// The pattern is compiled here; on error the active pattern is left untouched.
    pub fn set_token_pattern(&mut self, pattern: &str) -> Result<(), TokenizerError> {
        let regex = Regex::new(pattern).map_err(|source| TokenizerError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        debug!(pattern, "custom token pattern installed");
        self.custom = Some(regex);
        Ok(())
    }

    /// Go back to the default token class (honouring the digits flag).
    pub fn clear_token_pattern(&mut self) {
        self.custom = None;
    }

    pub fn has_custom_pattern(&self) -> bool {
        self.custom.is_some()
    }

    /// Source of the pattern currently in use.
    pub fn pattern(&self) -> &str {
        self.regex().as_str()
    }

    /// Lazily yield tokens of `text`, left to right, non-overlapping.
    #[inline]
    pub fn tokenize<'r, 't>(&'r self, text: &'t str) -> Tokens<'r, 't> {
        Tokens {
            inner: self.regex().find_iter(text),
        }
    }

    #[inline(always)]
    fn regex(&self) -> &Regex {
        match &self.custom {
            Some(regex) => regex,
            None if self.include_digits => &DIGITS_REGEX,
            None => &DEFAULT_REGEX,
        }
    }
}

/// Iterator over the tokens of one text. Empty matches are skipped.
#[derive(Debug)]
pub struct Tokens<'r, 't> {
    inner: Matches<'r, 't>,
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = &'t str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(|m| m.as_str())
            .find(|token| !token.is_empty())
    }
}

impl FusedIterator for Tokens<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens<'t>(tokenizer: &Tokenizer, text: &'t str) -> Vec<&'t str> {
        tokenizer.tokenize(text).collect()
    }

    #[test]
    fn default_pattern_keeps_apostrophes_hyphens_underscores() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokens(&tokenizer, "Hello, world! It's a well-known snake_case fact 42."),
            ["Hello", "world", "It's", "a", "well-known", "snake_case", "fact"]
        );
    }

    #[test]
    fn separators_are_dropped() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokens(&tokenizer, "  a\t\tb\n;c...d  "), ["a", "b", "c", "d"]);
        assert!(tokens(&tokenizer, "").is_empty());
        assert!(tokens(&tokenizer, " ,.!? 123 ").is_empty());
    }

    #[test]
    fn combining_marks_stay_inside_tokens() {
        let tokenizer = Tokenizer::new();
        // e + COMBINING ACUTE ACCENT (Mn)
        assert_eq!(tokens(&tokenizer, "cafe\u{0301} noir"), ["cafe\u{0301}", "noir"]);
        // Devanagari vowel sign (Mc)
        assert_eq!(tokens(&tokenizer, "हिन्दी भाषा"), ["हिन्दी", "भाषा"]);
    }

    #[test]
    fn digits_split_words_by_default_and_join_when_included() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(tokens(&tokenizer, "abc123def 2024"), ["abc", "def"]);
        assert!(!tokenizer.include_digits());

        tokenizer.set_include_digits(true);
        assert_eq!(tokens(&tokenizer, "abc123def 2024"), ["abc123def", "2024"]);
        assert_eq!(tokenizer.pattern(), DIGITS_PATTERN);

        // Arabic-Indic digits are decimal digits too.
        assert_eq!(tokens(&tokenizer, "٢٠٢٤"), ["٢٠٢٤"]);
    }

    #[test]
    fn custom_pattern_replaces_default() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_include_digits(true);
        tokenizer.set_token_pattern(r"[a-z]+").unwrap();
        assert!(tokenizer.has_custom_pattern());
        assert_eq!(tokenizer.pattern(), "[a-z]+");
        assert_eq!(tokens(&tokenizer, "abc123DEF ghi"), ["abc", "ghi"]);

        tokenizer.clear_token_pattern();
        assert_eq!(tokenizer.pattern(), DIGITS_PATTERN);
    }

    #[test]
    fn invalid_pattern_rejected_and_previous_kept() {
        let mut tokenizer = Tokenizer::with_pattern(r"\w+").unwrap();
        let err = tokenizer.set_token_pattern("[unclosed").unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"
        ));
        assert!(err.to_string().contains("[unclosed"));
        assert_eq!(tokenizer.pattern(), r"\w+");

        assert!(Tokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn empty_matches_are_skipped() {
        let tokenizer = Tokenizer::with_pattern("a*").unwrap();
        assert_eq!(tokens(&tokenizer, "baab b a"), ["aa", "a"]);
    }

    #[test]
    fn tokens_is_fused() {
        let tokenizer = Tokenizer::new();
        let mut it = tokenizer.tokenize("one");
        assert_eq!(it.next(), Some("one"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
