//! Text transformation stages.
//!
//! A [`Stage`] is one step of the cleaning pipeline. Each stage exposes a
//! cheap [`Stage::needs_apply`] pre-check so the pipeline can skip it and keep
//! the input borrowed, and an allocation-aware [`Stage::apply`] that returns
//! the input unchanged (`Cow::Borrowed` stays borrowed) when there is nothing
//! to do.

pub mod collapse_whitespace;
pub mod remove_stop_words;
pub mod strip_markup;

use std::borrow::Cow;

use tracing::trace;

pub use collapse_whitespace::{COLLAPSE_WHITESPACE, CollapseWhitespace};
pub use remove_stop_words::RemoveStopWords;
pub use strip_markup::StripMarkup;

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Short identifier, used in log events.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must be correct even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Run `stages` in order, skipping those whose pre-check says there is nothing to do.
pub(crate) fn process<'a>(stages: &[&dyn Stage], text: &'a str) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);
    for stage in stages {
        if !stage.needs_apply(&text) {
            trace!(stage = stage.name(), "skipped");
            continue;
        }
        text = stage.apply(text);
        trace!(stage = stage.name(), len = text.len(), "applied");
    }
    text
}
