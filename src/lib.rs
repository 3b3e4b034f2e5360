//! Stop-word removal and stop-word based language guessing.
//!
//! Text is NFC-normalized and lowercased, split into word tokens, and every
//! token found in the dictionary of the chosen language is replaced by a
//! single space. The result is a canonical, single-spaced form suited to
//! fingerprinting (SimHash, Levenshtein) where frequent words are noise.
//!
//! ```
//! assert_eq!(
//!     stopwords::clean("The quick brown fox jumps over the lazy dog.", "en", false),
//!     " quick brown fox jumps lazy dog ",
//! );
//!
//! let guess = stopwords::guess_language("Le chat est sur la table", ["en", "fr"]);
//! assert_eq!(guess.best(), Some("fr"));
//! ```

pub mod cleaner;
pub mod dictionary;
pub mod filter;
pub mod guess;
pub mod lang;
pub mod normalize;
pub mod registry;
pub mod stage;
pub mod tokenizer;

use std::borrow::Cow;

pub use cleaner::{Cleaner, CleanerBuilder, CleanerError, default_cleaner};
pub use dictionary::{Dictionary, DictionaryError};
pub use filter::FilterOutcome;
pub use guess::GuessResult;
pub use lang::{
    ARA, BUL, CAT, CES, DAN, DEU, ELL, ENG, FAS, FIN, FRA, HUN, IND, ITA, JPN, KHM, LAV, Lang, NLD,
    NOR, POL, POR, RON, RUS, SLK, SPA, SWE, THA, TUR, all_langs, resolve_base_code,
};
pub use normalize::normalize;
pub use registry::Registry;
pub use stage::{COLLAPSE_WHITESPACE, CollapseWhitespace, RemoveStopWords, Stage, StripMarkup};
pub use tokenizer::{Tokenizer, TokenizerError};

/// Clean `content` with the default [`Cleaner`], see [`Cleaner::clean`].
#[inline]
pub fn clean<'a>(content: &'a str, lang: &str, strip_markup: bool) -> Cow<'a, str> {
    default_cleaner().clean(content, lang, strip_markup)
}

/// Filter `text` with `dictionary` using the default tokenizer.
#[inline]
pub fn filter_count(text: &str, dictionary: &Dictionary) -> FilterOutcome {
    default_cleaner().filter_count(text, dictionary)
}

/// Filter `text` with `dictionary` using the default tokenizer, discarding the counts.
#[inline]
pub fn filter(text: &str, dictionary: &Dictionary) -> String {
    default_cleaner().filter(text, dictionary)
}

/// Guess among `candidates` with the default [`Cleaner`], without markup stripping.
#[inline]
pub fn guess_language<I, S>(content: &str, candidates: I) -> GuessResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_cleaner().guess_language(content, candidates, false)
}


#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
