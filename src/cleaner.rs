use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    dictionary::{Dictionary, DictionaryError},
    filter::{self, FilterOutcome},
    guess::{self, GuessResult},
    registry::Registry,
    stage::{self, COLLAPSE_WHITESPACE, RemoveStopWords, Stage, StripMarkup},
    tokenizer::{Tokenizer, TokenizerError},
};

#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Owns one [`Tokenizer`] and one [`Registry`] and runs the full cleaning
/// pipeline with them.
///
/// A `Cleaner` is immutable once built; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    tokenizer: Tokenizer,
    registry: Registry,
}

static DEFAULT_CLEANER: LazyLock<Cleaner> = LazyLock::new(Cleaner::new);

/// The shared default-configured cleaner behind the crate-level functions.
#[inline]
pub fn default_cleaner() -> &'static Cleaner {
    &DEFAULT_CLEANER
}

impl Cleaner {
    /// Default tokenizer, built-in dictionaries only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    pub fn from_parts(tokenizer: Tokenizer, registry: Registry) -> Self {
        Self {
            tokenizer,
            registry,
        }
    }

    #[inline(always)]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[inline(always)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Strip markup (optionally), remove stop words of `lang`, collapse
    /// whitespace runs.
    ///
    /// `lang` is a code or a language tag. When it resolves to no dictionary
    /// the content is not filtered, only whitespace-collapsed.
    pub fn clean<'a>(&self, content: &'a str, lang: &str, strip_markup: bool) -> Cow<'a, str> {
        let remove = self.registry.lookup(lang).map(|dictionary| RemoveStopWords {
            tokenizer: &self.tokenizer,
            dictionary,
        });
        if remove.is_none() {
            debug!(lang, "no dictionary for language, content not filtered");
        }

        let mut stages: SmallVec<[&dyn Stage; 3]> = SmallVec::new();
        if strip_markup {
            stages.push(&StripMarkup);
        }
        if let Some(remove) = &remove {
            stages.push(remove);
        }
        stages.push(&COLLAPSE_WHITESPACE);

        stage::process(&stages, content)
    }

    /// Guess the language of `content` among `candidates` and clean it with the winner.
    pub fn guess_language<I, S>(
        &self,
        content: &str,
        candidates: I,
        strip_markup: bool,
    ) -> GuessResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let content = if strip_markup {
            stage::process(&[&StripMarkup as &dyn Stage], content)
        } else {
            Cow::Borrowed(content)
        };
        guess::guess_language(&self.tokenizer, &self.registry, &content, candidates)
    }

    /// Filter with an explicit dictionary, keeping the counts.
    #[inline]
    pub fn filter_count(&self, text: &str, dictionary: &Dictionary) -> FilterOutcome {
        filter::filter_count(&self.tokenizer, text, dictionary)
    }

    /// Filter with an explicit dictionary, whitespace collapsed.
    #[inline]
    pub fn filter(&self, text: &str, dictionary: &Dictionary) -> String {
        filter::filter(&self.tokenizer, text, dictionary)
    }

    /// Filter with the dictionary of `lang` (code or tag), if there is one.
    pub fn filter_lang(&self, text: &str, lang: &str) -> Option<FilterOutcome> {
        let dictionary = self.registry.lookup(lang)?;
        Some(self.filter_count(text, dictionary))
    }
}

#[derive(Debug, Default)]
pub struct CleanerBuilder {
    include_digits: bool,
    token_pattern: Option<String>,
    dictionaries: Vec<Dictionary>,
    files: Vec<(String, PathBuf)>,
}

impl CleanerBuilder {
    /// Keep decimal digits inside tokens.
    pub fn include_digits(mut self, include: bool) -> Self {
        self.include_digits = include;
        self
    }

    /// Replace the default token pattern. Validated in [`CleanerBuilder::build`].
    pub fn token_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.token_pattern = Some(pattern.into());
        self
    }

    /// Add a dictionary, overriding any built-in or earlier one with the same code.
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionaries.push(dictionary);
        self
    }

    /// Load a word list file for `code` when building.
    pub fn dictionary_file(mut self, code: &str, path: impl AsRef<Path>) -> Self {
        self.files.push((code.to_owned(), path.as_ref().to_path_buf()));
        self
    }

    pub fn build(self) -> Result<Cleaner, CleanerError> {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_include_digits(self.include_digits);
        if let Some(pattern) = &self.token_pattern {
            tokenizer.set_token_pattern(pattern)?;
        }

        let mut registry = Registry::new();
        for dictionary in self.dictionaries {
            registry.register(dictionary);
        }
        for (code, path) in &self.files {
            registry.register(Dictionary::from_path(code, path)?);
        }

        Ok(Cleaner::from_parts(tokenizer, registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_english() {
        let cleaner = Cleaner::new();
        assert_eq!(
            cleaner.clean("The quick brown fox jumps over the lazy dog.", "en", false),
            " quick brown fox jumps lazy dog "
        );
    }

    #[test]
    fn clean_accepts_tags() {
        let cleaner = Cleaner::new();
        assert_eq!(cleaner.clean("The cat", "en-US", false), " cat ");
        assert_eq!(cleaner.clean("Le chat", "fr_CA", false), " chat ");
        assert_eq!(cleaner.clean("Der Hund", "ger", false), " hund ");
    }

    #[test]
    fn unknown_language_passes_through() {
        let cleaner = Cleaner::new();
        let input = "Hello world";
        let result = cleaner.clean(input, "xx", false);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));

        assert_eq!(cleaner.clean("Hello   world", "not a tag", false), "Hello world");
        assert_eq!(cleaner.clean("Hello world", "", false), "Hello world");
    }

    #[test]
    fn clean_strips_markup_first() {
        let cleaner = Cleaner::new();
        assert_eq!(
            cleaner.clean("<p>The <b>cat</b> &amp; the dog</p>", "en", true),
            " cat dog "
        );
        assert_eq!(cleaner.clean("<p>The cat</p>", "xx", true), " The cat ");
        assert_eq!(cleaner.clean("<p>The cat</p>", "xx", false), "<p>The cat</p>");
    }

    #[test]
    fn empty_input() {
        let cleaner = Cleaner::new();
        assert_eq!(cleaner.clean("", "en", true), "");
        assert_eq!(cleaner.filter_lang("", "en"), Some(FilterOutcome::default()));
    }

    #[test]
    fn guess_with_markup() {
        let cleaner = Cleaner::new();
        let result = cleaner.guess_language("<p>le chat</p><p>the</p>", ["fr", "en"], true);
        assert_eq!(result.languages, ["fr", "en"]);
        assert_eq!(result.text, " chat the ");

        let result = cleaner.guess_language("<p>le chat</p>", ["fr"], false);
        assert_eq!(result.languages, ["fr"]);
        assert_eq!(result.total, 4, "tag names count as tokens");
    }

    #[test]
    fn filter_lang_unknown_is_none() {
        let cleaner = Cleaner::new();
        assert!(cleaner.filter_lang("the cat", "xx").is_none());
        let outcome = cleaner.filter_lang("the cat", "EN").unwrap();
        assert_eq!((outcome.text.as_str(), outcome.matches, outcome.total), (" cat ", 1, 2));
    }

    #[test]
    fn builder_configures_tokenizer() {
        let cleaner = Cleaner::builder().include_digits(true).build().unwrap();
        assert!(cleaner.tokenizer().include_digits());
        assert_eq!(cleaner.clean("the 3 cats", "en", false), " 3 cats ");

        let cleaner = Cleaner::builder().token_pattern(r"\S+").build().unwrap();
        assert_eq!(cleaner.clean("the cat, the end.", "en", false), " cat, end. ");
    }

    #[test]
    fn builder_rejects_bad_pattern() {
        let err = Cleaner::builder().token_pattern("(").build().unwrap_err();
        assert!(matches!(err, CleanerError::Tokenizer(TokenizerError::InvalidPattern { .. })));
    }

    #[test]
    fn builder_registers_dictionaries() {
        let cleaner = Cleaner::builder()
            .dictionary(Dictionary::from_words("xx", ["foo"]))
            .dictionary(Dictionary::from_words("en", ["cat"]))
            .build()
            .unwrap();
        assert_eq!(cleaner.clean("foo bar", "xx", false), " bar ");
        assert_eq!(cleaner.clean("the cat", "en", false), "the ");
        assert!(cleaner.registry().contains("xx"));
    }

    #[test]
    fn builder_loads_files() {
        let path = std::env::temp_dir()
            .join(format!("stopwords-cleaner-{}.txt", std::process::id()));
        std::fs::write(&path, "# list\nfoo\n").unwrap();
        let cleaner = Cleaner::builder().dictionary_file("zz", &path).build().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cleaner.clean("Foo bar", "zz", false), " bar ");

        let missing = std::env::temp_dir().join("stopwords-cleaner-missing.txt");
        let err = Cleaner::builder().dictionary_file("zz", &missing).build().unwrap_err();
        assert!(matches!(err, CleanerError::Dictionary(DictionaryError::Read { .. })));
    }

    #[test]
    fn default_cleaner_is_shared() {
        assert!(std::ptr::eq(default_cleaner(), default_cleaner()));
        assert_eq!(default_cleaner().clean("the cat", "en", false), " cat ");
    }
}
