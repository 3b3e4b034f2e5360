use std::borrow::Cow;

use crate::{dictionary::Dictionary, filter::filter_count, stage::Stage, tokenizer::Tokenizer};

/// Normalize, tokenize and drop stop words, leaving one space per token.
///
/// This rewrites any non-empty text into the filter's canonical form, so
/// unlike the other stages it is not a no-op on plain text and is not
/// idempotent: a second pass drops the leading separators of removed words.
#[derive(Debug, Clone, Copy)]
pub struct RemoveStopWords<'d> {
    pub tokenizer: &'d Tokenizer,
    pub dictionary: &'d Dictionary,
}

impl<'d> RemoveStopWords<'d> {
    pub fn new(tokenizer: &'d Tokenizer, dictionary: &'d Dictionary) -> Self {
        Self {
            tokenizer,
            dictionary,
        }
    }
}

impl Stage for RemoveStopWords<'_> {
    fn name(&self) -> &'static str {
        "remove_stop_words"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let outcome = filter_count(self.tokenizer, &text, self.dictionary);
        if outcome.text == text.as_ref() {
            return text;
        }
        Cow::Owned(outcome.text)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for RemoveStopWords<'_> {
        fn samples() -> &'static [&'static str] {
            &[
                "The quick brown fox",
                "hello world ",
                "Ünïcödé TEXT and more",
                "",
            ]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &[""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("THE cat", " cat "),
                ("a, b; c!", " b c "),
                ("cat", "cat "),
            ]
        }

        fn skip_idempotency() -> bool {
            true
        }

        fn rewrites_plain_text() -> bool {
            true
        }
    }

    #[test]
    fn universal_contract_compliance() {
        let tokenizer = Tokenizer::new();
        let dictionary = Dictionary::builtin("en").unwrap();
        assert_stage_contract!(RemoveStopWords::new(&tokenizer, dictionary));
    }
}
