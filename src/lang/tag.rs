//! Language tag resolution.
//!
//! Accepts BCP 47 tags (`en-US`, `zh-Hant-TW`), POSIX-style locales (`de_DE`)
//! and bare ISO 639 codes, and reduces them to the lowercase primary language
//! subtag. Three-letter and legacy codes of the built-in languages are folded
//! onto their two-letter code so `eng`, `fre` and `nb` find a dictionary.
//! Malformed input resolves to `None`, never to an error.

use crate::lang::data::ALIASES;

const UNDETERMINED: &str = "und";

/// Resolve a language tag or code to its base language code.
pub fn resolve_base_code(tag: &str) -> Option<String> {
    let mut subtags = tag.trim().split(['-', '_']);
    let primary = subtags.next()?;

    if !(2..=8).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    if !subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
    {
        return None;
    }

    let primary = primary.to_ascii_lowercase();
    if primary == UNDETERMINED {
        return None;
    }

    match ALIASES.get(primary.as_str()) {
        Some(code) => Some((*code).to_owned()),
        None => Some(primary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_codes_pass_through_lowercased() {
        assert_eq!(resolve_base_code("en").as_deref(), Some("en"));
        assert_eq!(resolve_base_code("FR").as_deref(), Some("fr"));
        assert_eq!(resolve_base_code(" de ").as_deref(), Some("de"));
        // Unknown but well-formed codes are still resolved; the registry decides.
        assert_eq!(resolve_base_code("xx").as_deref(), Some("xx"));
    }

    #[test]
    fn region_script_and_private_subtags_are_dropped() {
        assert_eq!(resolve_base_code("en-US").as_deref(), Some("en"));
        assert_eq!(resolve_base_code("pt-BR").as_deref(), Some("pt"));
        assert_eq!(resolve_base_code("zh-Hant-TW").as_deref(), Some("zh"));
        assert_eq!(resolve_base_code("de_DE").as_deref(), Some("de"));
        assert_eq!(resolve_base_code("en-US-x-private").as_deref(), Some("en"));
        assert_eq!(resolve_base_code("es-419").as_deref(), Some("es"));
    }

    #[test]
    fn three_letter_and_legacy_codes_fold_to_two_letters() {
        assert_eq!(resolve_base_code("eng").as_deref(), Some("en"));
        assert_eq!(resolve_base_code("fre").as_deref(), Some("fr"));
        assert_eq!(resolve_base_code("ger-AT").as_deref(), Some("de"));
        assert_eq!(resolve_base_code("nb-NO").as_deref(), Some("no"));
        assert_eq!(resolve_base_code("nn").as_deref(), Some("no"));
        assert_eq!(resolve_base_code("in").as_deref(), Some("id"));
        assert_eq!(resolve_base_code("RUM").as_deref(), Some("ro"));
    }

    #[test]
    fn malformed_tags_resolve_to_none() {
        for tag in ["", "e", "und", "UND-US", "12", "en--US", "en-", "toolongcode", "en US", "é"] {
            assert_eq!(resolve_base_code(tag), None, "tag `{tag}`");
        }
    }
}
