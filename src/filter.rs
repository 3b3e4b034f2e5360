//! Stop-word filtering.
//!
//! The output is a lossy canonical form: each token is followed by exactly one
//! [`SEPARATOR`], and a stop word is replaced by the separator alone. Original
//! punctuation and spacing are gone. Downstream fingerprinting relies on this
//! shape, so it must not change.

use crate::{
    dictionary::Dictionary,
    normalize::normalize,
    stage::{COLLAPSE_WHITESPACE, Stage},
    tokenizer::Tokenizer,
};

pub const SEPARATOR: char = ' ';

/// Result of one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Filtered text, one separator per token.
    pub text: String,
    /// Tokens found in the dictionary.
    pub matches: usize,
    /// Tokens seen.
    pub total: usize,
}

impl FilterOutcome {
    /// Tokens that survived filtering.
    #[inline]
    pub fn retained(&self) -> usize {
        self.total - self.matches
    }
}

/// Normalize, tokenize and drop every token found in `dictionary`.
pub fn filter_count(tokenizer: &Tokenizer, text: &str, dictionary: &Dictionary) -> FilterOutcome {
    let normalized = normalize(text);
    filter_tokens(tokenizer.tokenize(&normalized), dictionary, normalized.len())
}

/// [`filter_count`] without the counts, with whitespace runs collapsed.
pub fn filter(tokenizer: &Tokenizer, text: &str, dictionary: &Dictionary) -> String {
    let outcome = filter_count(tokenizer, text, dictionary);
    COLLAPSE_WHITESPACE.apply(outcome.text.into()).into_owned()
}

/// Filter an already normalized token stream.
pub(crate) fn filter_tokens<'t>(
    tokens: impl Iterator<Item = &'t str>,
    dictionary: &Dictionary,
    capacity: usize,
) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        text: String::with_capacity(capacity + 1),
        ..Default::default()
    };

    for token in tokens {
        if dictionary.contains(token) {
            outcome.matches += 1;
        } else {
            outcome.text.push_str(token);
        }
        outcome.text.push(SEPARATOR);
        outcome.total += 1;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> &'static Dictionary {
        Dictionary::builtin("en").unwrap()
    }

    #[test]
    fn stop_words_become_single_separator() {
        let outcome = filter_count(&Tokenizer::new(), "THE cat", en());
        assert_eq!(outcome.text, " cat ");
        assert_eq!((outcome.matches, outcome.total), (1, 2));
        assert_eq!(outcome.retained(), 1);
    }

    #[test]
    fn punctuation_and_spacing_are_lost() {
        let outcome = filter_count(
            &Tokenizer::new(),
            "The quick brown fox jumps over the lazy dog.",
            en(),
        );
        assert_eq!(outcome.text, " quick brown fox jumps   lazy dog ");
        assert_eq!((outcome.matches, outcome.total), (3, 9));
        assert_eq!(outcome.text.matches(SEPARATOR).count(), outcome.total);
    }

    #[test]
    fn no_hits_is_space_joined_lowercase_tokens() {
        let outcome = filter_count(&Tokenizer::new(), "Quick,  BROWN\tfox!", en());
        assert_eq!(outcome.text, "quick brown fox ");
        assert_eq!((outcome.matches, outcome.total), (0, 3));
    }

    #[test]
    fn empty_input() {
        assert_eq!(filter_count(&Tokenizer::new(), "", en()), FilterOutcome::default());
        assert_eq!(filter_count(&Tokenizer::new(), " ... ", en()), FilterOutcome::default());
        assert_eq!(filter(&Tokenizer::new(), "", en()), "");
    }

    #[test]
    fn filter_collapses_whitespace() {
        let text = filter(
            &Tokenizer::new(),
            "The quick brown fox jumps over the lazy dog.",
            en(),
        );
        assert_eq!(text, " quick brown fox jumps lazy dog ");
    }

    #[test]
    fn decomposed_input_matches_composed_dictionary() {
        let fr = Dictionary::builtin("fr").unwrap();
        let composed = filter_count(&Tokenizer::new(), "chat \u{e9}t\u{e9}", fr);
        let decomposed = filter_count(&Tokenizer::new(), "chat e\u{301}te\u{301}", fr);
        assert_eq!(composed, decomposed);
        assert_eq!(composed.text, "chat  ");
        assert_eq!(composed.matches, 1);
    }

    #[test]
    fn digits_follow_tokenizer_configuration() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(filter_count(&tokenizer, "the 2024 plan", en()).text, " plan ");

        tokenizer.set_include_digits(true);
        let outcome = filter_count(&tokenizer, "the 2024 plan", en());
        assert_eq!(outcome.text, " 2024 plan ");
        assert_eq!(outcome.total, 3);
    }
}
