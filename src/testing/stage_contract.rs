use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs for known transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// The stage is not idempotent (applying twice differs from once).
    fn skip_idempotency() -> bool {
        false
    }

    /// The stage rewrites any non-empty text into a canonical form, so plain
    /// text is not left alone and `needs_apply` may report work that turns
    /// out to be a no-op.
    fn rewrites_plain_text() -> bool {
        false
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_accurate`: `false` never hides a change; exact for
///    stages that leave plain text alone
/// 4. `handles_empty_string_and_ascii`: graceful on edge cases
/// 5. `no_panic_on_mixed_scripts`: survives real-world mixed input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text) {
            text = stage.apply(text);
            if text != input {
                assert!(
                    matches!(text, Cow::Owned(_)),
                    "stage `{}` changed `{input}` without allocating",
                    stage.name()
                );
            }
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        if S::skip_idempotency() {
            continue;
        }

        // Second pass must never allocate again.
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass of `{}` on `{input}`",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let mut text = Cow::Borrowed(pass_through);
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            pass_through as *const str,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample `{pass_through}` of `{}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    if S::skip_idempotency() {
        return;
    }
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "apply() of `{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let must_not_touch = ["", "hello", "world123", " !@#"];
    for &sample in S::samples().iter().chain(must_not_touch.iter()) {
        check_accuracy(&stage, sample);
    }
}

#[inline(always)]
fn check_accuracy<S: StageTestConfig>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so stages that always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;

    if S::rewrites_plain_text() {
        assert!(
            predicted || !actually_changes,
            "needs_apply() of `{}` missed a change on `{input}` (output = {output:?})",
            stage.name()
        );
    } else {
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on `{input}`\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output:?})",
            stage.name()
        );
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let empty: &str = "";
    let result_empty = if stage.needs_apply(empty) {
        stage.apply(Cow::Borrowed(empty))
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result_empty.as_ref(), "");

    if S::rewrites_plain_text() {
        return;
    }
    let ascii = "hello world 123 !@#";
    let result_ascii = stage.apply(Cow::Borrowed(ascii));
    assert_eq!(result_ascii.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文 <b>x</b> &amp;  \t end",
    ));
}
