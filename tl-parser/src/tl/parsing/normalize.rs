//! Line normalization
//!
//! Every raw line is trimmed and a leading `///` documentation comment is
//! rewritten to a plain `//` comment, so later matchers only ever look for
//! `//`. Blank lines never reach the rest of the scanner.

use crate::tl::markers;
use std::borrow::Cow;

/// Normalize a raw line, returning `None` for blank lines.
pub fn normalize(raw: &str) -> Option<Cow<'_, str>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with(markers::DOC_COMMENT) {
        return Some(Cow::Borrowed(&line[1..]));
    }
    Some(Cow::Borrowed(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \t "), None);
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("  ping = Pong;\r").as_deref(), Some("ping = Pong;"));
    }

    #[test]
    fn test_doc_comment_alias() {
        assert_eq!(
            normalize("/// @description x").as_deref(),
            Some("// @description x")
        );
        assert_eq!(normalize("///@class A").as_deref(), Some("//@class A"));
        assert_eq!(normalize("//// x").as_deref(), Some("/// x"));
        assert_eq!(normalize("// x").as_deref(), Some("// x"));
    }
}
