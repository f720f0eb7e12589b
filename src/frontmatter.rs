//! Frontmatter splitting: metadata block vs. body.
//!
//! Documents open with a fenced YAML block:
//!
//! ```text
//! ---
//! title: Hello
//! tags:
//!   - a
//!   - b
//! ---
//! Body text, returned verbatim.
//! ```
//!
//! Splitting never fails. A document without a fence, with an unterminated
//! fence, or with YAML the parser rejects degrades to "no metadata" — the
//! body carries the content either way and downstream validation treats
//! missing metadata the same as an empty map. Trimming and defaulting are
//! the validator's job; the body comes back exactly as written.

use serde_yaml::Value;
use tracing::warn;

/// A document split into its metadata block and body.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Parsed YAML metadata, or `None` when the document has no usable
    /// fence. Callers read fields through [`crate::validate`], which treats
    /// `None` and an empty mapping identically.
    pub meta: Option<Value>,
    /// Everything after the closing fence, unmodified. The whole input
    /// when no fence was found.
    pub body: &'a str,
}

impl<'a> Document<'a> {
    fn bare(body: &'a str) -> Self {
        Document { meta: None, body }
    }
}

/// Split raw document text into metadata and body.
///
/// Pure and deterministic; identical input yields identical output.
pub fn parse(raw: &str) -> Document<'_> {
    // The opening fence must be `---` alone on the first line.
    let Some(first_line_rest) = raw.strip_prefix("---") else {
        return Document::bare(raw);
    };
    let Some(open_end) = first_line_rest.find('\n') else {
        return Document::bare(raw);
    };
    if !first_line_rest[..open_end].trim().is_empty() {
        return Document::bare(raw);
    }

    let rest = &first_line_rest[open_end + 1..];
    let Some((yaml, body)) = split_at_closing_fence(rest) else {
        warn!("frontmatter fence opened but never closed; treating whole document as body");
        return Document::bare(raw);
    };

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) if !value.is_null() => Document {
            meta: Some(value),
            body,
        },
        Ok(_) => Document { meta: None, body },
        Err(e) => {
            warn!("unparsable frontmatter block: {e}");
            Document { meta: None, body }
        }
    }
}

/// Split at the first line that is a closing fence, returning the YAML
/// block and everything after the fence line.
///
/// Like the opening fence, a closing fence is `---` alone on its line
/// (trailing whitespace allowed). A `----` rule or a line with text after
/// the dashes does not close the block.
fn split_at_closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    loop {
        let line_end = rest[offset..].find('\n').map(|n| offset + n);
        let line = match line_end {
            Some(end) => &rest[offset..end],
            None => &rest[offset..],
        };
        if let Some(tail) = line.strip_prefix("---")
            && tail.trim().is_empty()
        {
            let after = match line_end {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            return Some((&rest[..offset], after));
        }
        match line_end {
            Some(end) => offset = end + 1,
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fence_and_body() {
        let doc = parse("---\ntitle: Hello\ndate: '2024-01-01'\n---\nHi there");
        let meta = doc.meta.unwrap();
        assert_eq!(meta.get("title").and_then(Value::as_str), Some("Hello"));
        assert_eq!(meta.get("date").and_then(Value::as_str), Some("2024-01-01"));
        assert_eq!(doc.body, "Hi there");
    }

    #[test]
    fn no_fence_yields_empty_meta_and_full_body() {
        let raw = "# Just markdown\n\nNo metadata here.";
        let doc = parse(raw);
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn body_is_untouched() {
        // Leading blank line and trailing whitespace survive; trimming is
        // not the parser's job.
        let doc = parse("---\na: 1\n---\n\n  body with edges  \n");
        assert_eq!(doc.body, "\n  body with edges  \n");
    }

    #[test]
    fn unterminated_fence_degrades_to_body_only() {
        let raw = "---\ntitle: Oops\n\nnever closed";
        let doc = parse(raw);
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn invalid_yaml_degrades_to_body_only() {
        let doc = parse("---\n{{not: yaml: at all}}\n---\nBody");
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn empty_fence_is_no_metadata() {
        let doc = parse("---\n---\nBody");
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn list_values_parse_as_sequences() {
        let doc = parse("---\ntags:\n  - a\n  - b\n---\n");
        let meta = doc.meta.unwrap();
        let tags = meta.get("tags").and_then(Value::as_sequence).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn dashes_inside_body_are_not_fences() {
        let doc = parse("---\ntitle: T\n---\nabove\n---\nbelow");
        assert!(doc.meta.is_some());
        assert_eq!(doc.body, "above\n---\nbelow");
    }

    #[test]
    fn horizontal_rule_does_not_close_the_fence() {
        // The `----` line is part of the block, not its terminator; the
        // body must not receive the residue of that line.
        let doc = parse("---\ntitle: T\n---- not a close\n---\nBody");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn closing_line_with_trailing_text_does_not_close_the_fence() {
        let doc = parse("---\ntitle: T\n--- not yet\n---\nBody");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn closing_fence_may_carry_trailing_whitespace() {
        let doc = parse("---\ntitle: T\n---  \nBody");
        assert!(doc.meta.is_some());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn opening_line_with_extra_text_is_not_a_fence() {
        let raw = "---- not a fence\nbody";
        let doc = parse(raw);
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn empty_input() {
        let doc = parse("");
        assert!(doc.meta.is_none());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn parse_is_deterministic() {
        let raw = "---\ntitle: Same\n---\nSame body";
        let a = parse(raw);
        let b = parse(raw);
        assert_eq!(a.meta, b.meta);
        assert_eq!(a.body, b.body);
    }
}
