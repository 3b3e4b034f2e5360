//! Stop-word dictionaries.
//!
//! Built-in dictionaries wrap the compile-time `phf` sets generated in
//! [`crate::lang::data`]; custom ones own a `HashSet` filled once at
//! construction. Either way every stored word is in [`normalize`]d form, so a
//! normalized token can be looked up directly.

use std::{
    borrow::Cow,
    collections::HashSet,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{lang::Lang, normalize::normalize};

const COMMENT: char = '#';

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read word list `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
}

enum Words {
    Builtin(&'static phf::Set<&'static str>),
    Custom(HashSet<String>),
}

/// Immutable set of stop words for one language code.
pub struct Dictionary {
    code: Cow<'static, str>,
    words: Words,
}

impl Dictionary {
    pub(crate) const fn from_static(lang: Lang, words: &'static phf::Set<&'static str>) -> Self {
        Self {
            code: Cow::Borrowed(lang.code),
            words: Words::Builtin(words),
        }
    }

    /// Build a dictionary from an iterator of words.
    ///
    /// Words are trimmed and normalized; empty entries are dropped. The code is
    /// stored ASCII-lowercased.
    pub fn from_words<I, S>(code: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                (!word.is_empty()).then(|| normalize(word).into_owned())
            })
            .collect();

        Self {
            code: Cow::Owned(code.trim().to_ascii_lowercase()),
            words: Words::Custom(words),
        }
    }

    /// Read one word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(code: &str, reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with(COMMENT) {
                continue;
            }
            words.push(word.to_owned());
        }
        Ok(Self::from_words(code, words))
    }

    /// Read a word list file, see [`Dictionary::from_reader`].
    pub fn from_path(code: &str, path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let read_err = |source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        Self::from_reader(code, BufReader::new(file)).map_err(|err| match err {
            DictionaryError::Io(source) => read_err(source),
            other => other,
        })
    }

    /// The built-in dictionary registered under `code`, if any.
    #[inline]
    pub fn builtin(code: &str) -> Option<&'static Dictionary> {
        crate::lang::data::STOP_WORDS.get(code)
    }

    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Membership test for an already normalized word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        match &self.words {
            Words::Builtin(set) => set.contains(word),
            Words::Custom(set) => set.contains(word),
        }
    }

    pub fn len(&self) -> usize {
        match &self.words {
            Words::Builtin(set) => set.len(),
            Words::Custom(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every word, in no particular order.
    pub fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match &self.words {
            Words::Builtin(set) => Box::new(set.iter().copied()),
            Words::Custom(set) => Box::new(set.iter().map(String::as_str)),
        }
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.words {
            Words::Builtin(_) => "builtin",
            Words::Custom(_) => "custom",
        };
        f.debug_struct("Dictionary")
            .field("code", &self.code())
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builtin_lookup() {
        let en = Dictionary::builtin("en").unwrap();
        assert_eq!(en.code(), "en");
        assert!(en.contains("the"));
        assert!(!en.contains("The"), "lookups expect normalized words");
        assert!(Dictionary::builtin("xx").is_none());
        assert!(Dictionary::builtin("EN").is_none(), "builtin keys are lowercase");
    }

    #[test]
    fn from_words_normalizes_and_drops_blanks() {
        let dict =
            Dictionary::from_words(" XX ", ["Foo", "  bar ", "", "   ", "CAFE\u{0301}", "foo"]);
        assert_eq!(dict.code(), "xx");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("foo"));
        assert!(dict.contains("bar"));
        assert!(dict.contains("café"));
        assert!(!dict.contains("Foo"));
    }

    #[test]
    fn from_reader_skips_comments_and_blank_lines() {
        let data = "# custom list\nalpha\n\n  Beta  \n#gamma\ndelta\r\n";
        let dict = Dictionary::from_reader("zz", Cursor::new(data)).unwrap();
        let mut words: Vec<&str> = dict.words().collect();
        words.sort_unstable();
        assert_eq!(words, ["alpha", "beta", "delta"]);
    }

    #[test]
    fn from_path_reads_file() {
        let path = std::env::temp_dir().join(format!("stopwords-dict-{}.txt", std::process::id()));
        std::fs::write(&path, "uno\ndos\n# tres\n").unwrap();
        let dict = Dictionary::from_path("eo", &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dict.code(), "eo");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("uno"));
        assert!(!dict.contains("tres"));
    }

    #[test]
    fn from_path_missing_file_reports_path() {
        let path = std::env::temp_dir().join("stopwords-no-such-list.txt");
        let err = Dictionary::from_path("en", &path).unwrap_err();
        match &err {
            DictionaryError::Read { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("stopwords-no-such-list.txt"));
    }

    #[test]
    fn debug_is_compact() {
        let dict = Dictionary::from_words("xx", ["a"]);
        assert_eq!(
            format!("{dict:?}"),
            r#"Dictionary { code: "xx", kind: "custom", len: 1 }"#
        );
    }
}
