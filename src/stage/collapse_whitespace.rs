use std::borrow::Cow;

use crate::stage::Stage;

/// Collapse every run of two or more ASCII whitespace characters into
/// `replacement`.
///
/// Single whitespace characters are left as they are and edges are not
/// trimmed, so `" a "` stays `" a "`. ASCII whitespace is space, `\t`, `\n`,
/// `\x0C` and `\r`; those bytes never occur inside a multi-byte UTF-8
/// sequence, so the scan works on bytes.
#[derive(Debug, Clone, Copy)]
pub struct CollapseWhitespace {
    pub replacement: char,
}

/// Collapse runs to a single ASCII space.
pub const COLLAPSE_WHITESPACE: CollapseWhitespace = CollapseWhitespace { replacement: ' ' };

impl Default for CollapseWhitespace {
    fn default() -> Self {
        COLLAPSE_WHITESPACE
    }
}

#[inline(always)]
fn first_run(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(2)
        .position(|w| w[0].is_ascii_whitespace() && w[1].is_ascii_whitespace())
}

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        first_run(text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let Some(start) = first_run(bytes) else {
            return text;
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start]);

        let mut i = start;
        while i < bytes.len() {
            if !bytes[i].is_ascii_whitespace() {
                let end = bytes[i..]
                    .iter()
                    .position(u8::is_ascii_whitespace)
                    .map_or(bytes.len(), |n| i + n);
                out.push_str(&text[i..end]);
                i = end;
                continue;
            }

            let run = bytes[i..]
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
            if run == 1 {
                out.push(bytes[i] as char);
            } else {
                out.push(self.replacement);
            }
            i += run;
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for CollapseWhitespace {
        fn samples() -> &'static [&'static str] {
            &[
                "a  b",
                " a\t\tb \n\n c ",
                "  leading and trailing  ",
                "one two three",
                "mixed \t\r\n run",
                "\u{a0}\u{a0}nbsp is not ASCII",
                "",
            ]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("a  b", "a b"),
                ("a\t\tb", "a b"),
                (" x \n\n y ", " x y "),
                ("a\tb", "a\tb"),
                ("\r\n", " "),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(COLLAPSE_WHITESPACE);
    }
}
