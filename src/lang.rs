pub mod data;
pub mod tag;

use crate::dictionary::Dictionary;

pub use data::{
    ARA, BUL, CAT, CES, DAN, DEU, ELL, ENG, FAS, FIN, FRA, HUN, IND, ITA, JPN, KHM, LAV, NLD, NOR,
    POL, POR, RON, RUS, SLK, SPA, SWE, THA, TUR,
};
pub use tag::resolve_base_code;

/// A language with a built-in stop-word dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    /// ISO 639-1 code, the registry key (`"en"`).
    pub code: &'static str,
    /// ISO 639-3 code (`"eng"`).
    pub iso3: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn iso3(&self) -> &'static str {
        self.iso3
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a built-in language by its two- or three-letter code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Lang> {
        all_langs()
            .iter()
            .find(|lang| {
                lang.code.eq_ignore_ascii_case(code) || lang.iso3.eq_ignore_ascii_case(code)
            })
            .copied()
    }

    /// The built-in stop-word dictionary of this language.
    pub fn dictionary(&self) -> Option<&'static Dictionary> {
        data::STOP_WORDS.get(self.code)
    }
}

/// Every language shipped with a built-in dictionary, in table order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    data::ALL_LANGS
}
