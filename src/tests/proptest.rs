mod prop_tests {
    use crate::{
        COLLAPSE_WHITESPACE, ENG, FRA, Stage, StripMarkup, Tokenizer, clean, filter::filter_count,
        guess_language, normalize,
    };
    use proptest::prelude::*;
    use unicode_normalization::UnicodeNormalization;

    proptest! {
        #[test]
        fn one_separator_per_token(s in "\\PC{0,300}") {
            let outcome = filter_count(&Tokenizer::new(), &s, ENG.dictionary().unwrap());
            prop_assert!(outcome.matches <= outcome.total);
            prop_assert_eq!(outcome.text.matches(' ').count(), outcome.total);
        }

        #[test]
        fn refilter_finds_no_stop_words(s in "[a-zA-Z ,.'-]{0,300}") {
            let tokenizer = Tokenizer::new();
            let en = ENG.dictionary().unwrap();
            let first = filter_count(&tokenizer, &s, en);
            let second = filter_count(&tokenizer, &first.text, en);
            let third = filter_count(&tokenizer, &second.text, en);
            prop_assert_eq!(second.matches, 0);
            prop_assert_eq!(second.total, first.retained());
            prop_assert_eq!(third.text, second.text);
        }

        #[test]
        fn ascii_case_does_not_matter(s in "[a-zA-Z ]{0,200}") {
            let tokenizer = Tokenizer::new();
            let en = ENG.dictionary().unwrap();
            let upper = filter_count(&tokenizer, &s.to_ascii_uppercase(), en);
            let lower = filter_count(&tokenizer, &s.to_ascii_lowercase(), en);
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn nfc_and_nfd_inputs_agree(s in "\\PC{0,200}") {
            let tokenizer = Tokenizer::new();
            let fr = FRA.dictionary().unwrap();
            let nfc: String = s.nfc().collect();
            let nfd: String = s.nfd().collect();
            prop_assert_eq!(
                filter_count(&tokenizer, &nfc, fr),
                filter_count(&tokenizer, &nfd, fr)
            );
        }

        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,300}") {
            let once = normalize(&s).into_owned();
            let twice = normalize(&once);
            prop_assert_eq!(twice.as_ref(), once.as_str());
        }

        #[test]
        fn clean_never_leaves_whitespace_runs(
            s in "[a-zA-Z \\t\\n<>/&;]{0,300}",
            markup in any::<bool>(),
        ) {
            for lang in ["en", "xx"] {
                let cleaned = clean(&s, lang, markup);
                prop_assert!(
                    !COLLAPSE_WHITESPACE.needs_apply(&cleaned),
                    "`{}` -> `{}`",
                    s,
                    cleaned
                );
            }
        }

        #[test]
        fn zero_max_means_no_languages(s in "\\PC{0,200}") {
            let guess = guess_language(&s, ["en", "fr", "de"]);
            if guess.max_matches == 0 {
                prop_assert!(guess.languages.is_empty());
                prop_assert_eq!(guess.text, s);
            } else {
                prop_assert!(!guess.languages.is_empty());
            }
        }

        #[test]
        fn markup_free_text_is_zero_copy(s in "[^<>&]{0,300}") {
            let input = s.as_str();
            let result = StripMarkup.apply(std::borrow::Cow::Borrowed(input));
            prop_assert!(matches!(
                result,
                std::borrow::Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()
            ));
        }

        #[test]
        fn collapse_is_idempotent(s in "[a-z \\t\\r\\n]{0,300}") {
            let once = COLLAPSE_WHITESPACE.apply(s.as_str().into()).into_owned();
            let twice = COLLAPSE_WHITESPACE.apply(once.as_str().into());
            prop_assert_eq!(twice.as_ref(), once.as_str());
        }
    }
}
