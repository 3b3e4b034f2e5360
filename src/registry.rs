//! Language code → dictionary lookup.
//!
//! Custom dictionaries shadow built-ins with the same code. Codes without a
//! dictionary are not errors; lookups just return `None`.

use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use crate::{
    dictionary::Dictionary,
    lang::{all_langs, data::STOP_WORDS, resolve_base_code},
};

/// Where a dictionary lookup landed.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'r> {
    Builtin(&'static Dictionary),
    Custom(&'r Arc<Dictionary>),
}

impl<'r> Entry<'r> {
    #[inline(always)]
    pub fn dictionary(self) -> &'r Dictionary {
        match self {
            Entry::Builtin(dict) => dict,
            Entry::Custom(dict) => dict.as_ref(),
        }
    }

    #[inline(always)]
    pub fn is_custom(self) -> bool {
        matches!(self, Entry::Custom(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    custom: HashMap<String, Arc<Dictionary>>,
}

impl Registry {
    /// Registry holding only the built-in dictionaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the dictionary for its code. Returns the custom
    /// dictionary it replaced, if there was one.
    pub fn register(&mut self, dictionary: Dictionary) -> Option<Arc<Dictionary>> {
        let code = dictionary.code().to_owned();
        debug!(code = %code, words = dictionary.len(), "dictionary registered");
        self.custom.insert(code, Arc::new(dictionary))
    }

    /// Exact lookup by code (ASCII case-insensitive).
    pub fn entry(&self, code: &str) -> Option<Entry<'_>> {
        let lower;
        let code = if code.bytes().any(|b| b.is_ascii_uppercase()) {
            lower = code.to_ascii_lowercase();
            lower.as_str()
        } else {
            code
        };

        if let Some(dict) = self.custom.get(code) {
            return Some(Entry::Custom(dict));
        }
        STOP_WORDS.get(code).map(Entry::Builtin)
    }

    /// Exact lookup by code (ASCII case-insensitive).
    #[inline]
    pub fn get(&self, code: &str) -> Option<&Dictionary> {
        self.entry(code).map(Entry::dictionary)
    }

    /// Resolve a language tag (`en-US`, `fre`, `pt_BR`) and look up its base code.
    pub fn resolve(&self, tag: &str) -> Option<&Dictionary> {
        let code = resolve_base_code(tag)?;
        self.get(&code)
    }

    /// Exact code first, then tag resolution.
    pub fn lookup(&self, tag_or_code: &str) -> Option<&Dictionary> {
        self.get(tag_or_code).or_else(|| self.resolve(tag_or_code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// Every code with a dictionary, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = all_langs()
            .iter()
            .map(|lang| lang.code)
            .chain(self.custom.keys().map(String::as_str))
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}
