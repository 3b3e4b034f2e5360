use std::borrow::Cow;

use memchr::memchr;

use crate::stage::Stage;

/// Removes markup and decodes character entities.
///
/// - Every `<...>` span, up to the first `>`, is replaced by one space so words
///   on either side of a tag never merge: `a<br>b` becomes `a b`. Text between
///   tags is kept, including the body of `<script>` and `<style>` elements.
/// - A `<` with no `>` anywhere after it is literal text (`1 < 2`).
/// - Entities are decoded *after* tags are removed, so escaped markup such as
///   `&lt;b&gt;` survives as the literal text `<b>`.
///
/// Zero-copy when the input has neither a tag nor a decodable entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripMarkup;

impl Stage for StripMarkup {
    fn name(&self) -> &'static str {
        "strip_markup"
    }

    fn needs_apply(&self, text: &str) -> bool {
        if has_tag(text.as_bytes()) {
            return true;
        }
        has_entity(text) && decode_entities(text).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let stripped = if has_tag(text.as_bytes()) {
            Cow::Owned(strip_tags(&text))
        } else {
            text
        };

        if !has_entity(&stripped) {
            return stripped;
        }
        match decode_entities(&stripped) {
            Some(decoded) => Cow::Owned(decoded),
            None => stripped,
        }
    }
}

/// Some `<` is followed, anywhere later, by a `>`.
#[inline(always)]
fn has_tag(bytes: &[u8]) -> bool {
    match memchr(b'<', bytes) {
        Some(open) => memchr(b'>', &bytes[open + 1..]).is_some(),
        None => false,
    }
}

#[inline(always)]
fn has_entity(text: &str) -> bool {
    memchr(b'&', text.as_bytes()).is_some()
}

/// Decoded text, or `None` when decoding changes nothing.
fn decode_entities(text: &str) -> Option<String> {
    let mut decoded = String::with_capacity(text.len());
    html_escape::decode_html_entities_to_string(text, &mut decoded);
    (decoded != text).then_some(decoded)
}

fn strip_tags(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let open = pos + offset;
        // No `>` left: the remainder is plain text.
        let Some(close) = memchr(b'>', &bytes[open + 1..]) else {
            break;
        };
        out.push_str(&text[pos..open]);
        out.push(' ');
        pos = open + 1 + close + 1;
    }
    out.push_str(&text[pos..]);
    out
}
