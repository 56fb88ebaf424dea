//! Markdown escaping for free text sent to LSP clients.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Characters that are significant in LSP markdown content.
#[allow(clippy::expect_used)]
static MARKDOWN_SPECIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\\`*_{}\[\]()#+\-.!])").expect("markdown escape pattern is valid")
});

/// Escape markdown-significant characters in free text.
///
/// `None` passes through as `None`. Otherwise every special character is
/// prefixed with a backslash in a single left-to-right pass; inserted
/// backslashes are never rescanned.
#[must_use]
pub fn escape_markdown(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(|text| MARKDOWN_SPECIALS.replace_all(text, r"\$1"))
}
