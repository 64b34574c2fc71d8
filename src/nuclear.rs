use std::sync::LazyLock;

use regex::Regex;

use crate::transform::Transformer;

/// Class attribute emitted by the highlighter on its container elements.
///
/// The closing quote is part of the match: the attribute value must be
/// precisely `shiki`, so `class="shiki-extra"` stays untouched.
static SHIKI_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="shiki""#).unwrap());

const NUCLEAR_CLASS_ATTR: &str = r#"class="shiki nuclear-code""#;

/// Append the `nuclear-code` class to every highlighter container.
///
/// Global replacement over the whole document; everything outside the matched
/// attribute text is preserved byte-for-byte. Idempotent: the rewritten
/// attribute no longer matches, so a second pass is a no-op.
pub fn add_nuclear_class(html: &str) -> String {
    SHIKI_CLASS_RE
        .replace_all(html, NUCLEAR_CLASS_ATTR)
        .into_owned()
}

/// The `nuclear-hacker-theme` transformer.
///
/// Preprocess leaves the token stream alone; postprocess tags highlighter
/// containers with `nuclear-code` so the deck's CSS can restyle them without
/// nested HTML edits.
pub fn transformer() -> Transformer {
    Transformer::new("nuclear-hacker-theme")
        .with_preprocess(|code, _options| code.to_string())
        .with_postprocess(add_nuclear_class)
}
