//! Stop-word frequency language guessing.
//!
//! Every candidate dictionary is scored against the same normalized token
//! stream; the candidates with the highest hit count win. This is a heuristic:
//! it can report several tied languages, or none at all.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    dictionary::Dictionary,
    filter::filter_tokens,
    normalize::normalize,
    registry::Registry,
    stage::{COLLAPSE_WHITESPACE, Stage},
    tokenizer::Tokenizer,
};

/// Outcome of [`guess_language`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessResult {
    /// Content filtered with the first winner and whitespace-collapsed, or the
    /// content unchanged when nothing matched.
    pub text: String,
    /// Candidate codes tied at `max_matches`, in candidate order. Empty when
    /// `max_matches == 0`.
    pub languages: Vec<String>,
    pub max_matches: usize,
    /// Tokens seen by the winning filter pass; 0 when nothing matched.
    pub total: usize,
}

impl GuessResult {
    /// The first winner, if any stop word matched at all.
    #[inline]
    pub fn best(&self) -> Option<&str> {
        if self.max_matches == 0 {
            return None;
        }
        self.languages.first().map(String::as_str)
    }

    /// More than one candidate reached the top score.
    #[inline]
    pub fn is_tie(&self) -> bool {
        self.languages.len() > 1
    }
}

struct Score<'a> {
    code: &'a str,
    dictionary: &'a Dictionary,
    matches: usize,
}

/// Score `candidates` against `content` and clean it with the best match.
///
/// Candidates are codes or tags; those without a dictionary are skipped. A
/// candidate resolving to a dictionary already scored (`en`, `EN`, `en-US`) is
/// skipped too, so only its first spelling is reported.
pub fn guess_language<I, S>(
    tokenizer: &Tokenizer,
    registry: &Registry,
    content: &str,
    candidates: I,
) -> GuessResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized = normalize(content);
    let tokens: SmallVec<[&str; 64]> = tokenizer.tokenize(&normalized).collect();

    let candidates: SmallVec<[S; 8]> = candidates.into_iter().collect();
    let mut scores: SmallVec<[Score<'_>; 8]> = SmallVec::new();

    for candidate in &candidates {
        let code = candidate.as_ref();
        let Some(dictionary) = registry.lookup(code) else {
            trace!(candidate = code, "no dictionary, skipped");
            continue;
        };
        if scores.iter().any(|s| std::ptr::eq(s.dictionary, dictionary)) {
            trace!(candidate = code, "dictionary already scored, skipped");
            continue;
        }

        let matches = tokens.iter().filter(|t| dictionary.contains(t)).count();
        trace!(candidate = code, matches, "candidate scored");
        scores.push(Score {
            code,
            dictionary,
            matches,
        });
    }

    // `max_by_key` keeps the last maximum; reversing makes it the first candidate.
    let Some(first) = scores
        .iter()
        .rev()
        .max_by_key(|s| s.matches)
        .filter(|s| s.matches > 0)
    else {
        debug!(candidates = scores.len(), "no stop words matched");
        return GuessResult {
            text: content.to_owned(),
            ..Default::default()
        };
    };

    let max_matches = first.matches;
    let languages: Vec<String> = scores
        .iter()
        .filter(|s| s.matches == max_matches)
        .map(|s| s.code.to_owned())
        .collect();

    let outcome = filter_tokens(tokens.iter().copied(), first.dictionary, normalized.len());
    let text = COLLAPSE_WHITESPACE.apply(outcome.text.into()).into_owned();

    debug!(
        languages = ?languages,
        max_matches,
        total = outcome.total,
        "language guessed"
    );
    GuessResult {
        text,
        languages,
        max_matches,
        total: outcome.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(content: &str, candidates: &[&str]) -> GuessResult {
        guess_language(&Tokenizer::new(), &Registry::new(), content, candidates)
    }

    #[test]
    fn picks_language_with_most_hits() {
        let result = guess(
            "Le chat est sur la table et les enfants jouent dans le jardin",
            &["en", "fr", "de"],
        );
        assert_eq!(result.languages, ["fr"]);
        assert_eq!(result.best(), Some("fr"));
        assert!(!result.is_tie());
        assert_eq!(result.max_matches, 8);
        assert_eq!(result.total, 13);
        assert_eq!(result.text, " chat table enfants jouent jardin ");
    }

    #[test]
    fn ties_keep_candidate_order_and_clean_with_first() {
        let result = guess("le the", &["en", "fr"]);
        assert_eq!(result.languages, ["en", "fr"]);
        assert!(result.is_tie());
        assert_eq!(result.max_matches, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.text, "le ");

        let result = guess("le the", &["fr", "en"]);
        assert_eq!(result.languages, ["fr", "en"]);
        assert_eq!(result.text, " the ");
    }

    #[test]
    fn zero_matches_returns_content_unmodified() {
        let result = guess("xyzzy plugh", &["en", "fr"]);
        assert_eq!(result.max_matches, 0);
        assert!(result.languages.is_empty());
        assert_eq!(result.best(), None);
        assert_eq!(result.total, 0);
        assert_eq!(result.text, "xyzzy plugh");
    }

    #[test]
    fn unknown_candidates_are_skipped() {
        let result = guess("the cat", &["xx", "en", "not a tag"]);
        assert_eq!(result.languages, ["en"]);
        assert_eq!(result.text, " cat ");

        let result = guess("the cat", &["xx", "yy"]);
        assert!(result.languages.is_empty());
        assert_eq!(result.text, "the cat");

        let result = guess("the cat", &[]);
        assert_eq!(result, GuessResult { text: "the cat".into(), ..Default::default() });
    }

    #[test]
    fn repeated_candidates_scored_once() {
        let result = guess("le the", &["en", "fr", "en"]);
        assert_eq!(result.languages, ["en", "fr"]);

        let result = guess("the cat", &["en", "EN", "en-US", "eng"]);
        assert_eq!(result.languages, ["en"]);
        assert_eq!(result.text, " cat ");

        let result = guess("le the", &["fr-CA", "en_GB", "fra", "en"]);
        assert_eq!(result.languages, ["fr-CA", "en_GB"]);
    }

    #[test]
    fn candidates_may_be_tags() {
        let result = guess("Der Hund und die Katze", &["en-GB", "de-AT"]);
        assert_eq!(result.languages, ["de-AT"]);
        assert_eq!(result.max_matches, 3);
    }

    #[test]
    fn scores_are_independent_of_candidate_order() {
        let content = "the cat and the dog le chien";
        let a = guess(content, &["en", "fr"]);
        let b = guess(content, &["fr", "en"]);
        assert_eq!(a.languages, ["en"]);
        assert_eq!(b.languages, ["en"]);
        assert_eq!(a.max_matches, 3);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn empty_content() {
        let result = guess("", &["en"]);
        assert_eq!(result, GuessResult::default());
    }
}
