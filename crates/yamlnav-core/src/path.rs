//! Build dot-joined key paths from an ordered token stream.

use tracing::trace;
use yamlnav_scan::{KeyToken, Span};

/// A resolved key path: the dot-joined ancestor keys plus the span of the
/// originating key token (not the whole subtree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Dot-joined keys, root first: `en.greeting.hello`.
    pub name: String,
    /// The originating key token's span.
    pub region: Span,
}

/// One open nesting level while walking the token stream.
struct Level<'src> {
    key: &'src str,
    indent: u32,
}

/// Build the key-path symbol list for a document.
///
/// Tokens must be ordered by ascending `span.start` (the scanner's
/// contract); one symbol is emitted per token, in the same order. Nesting
/// is inferred from each key's column: a key indented deeper than the one
/// before nests under it, while equal indentation replaces the previous
/// key at that depth (a sibling, not a child). Offsets are byte offsets;
/// out-of-bounds or mid-character offsets are clamped rather than
/// panicking.
pub fn build_symbols(source: &str, tokens: &[KeyToken<'_>]) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Level> = Vec::new();

    for token in tokens {
        let key = token.text.trim();
        let indent = indent_of(source, token.span.start);

        while stack.last().is_some_and(|level| level.indent >= indent) {
            stack.pop();
        }
        stack.push(Level { key, indent });

        let name = stack
            .iter()
            .map(|level| level.key)
            .collect::<Vec<_>>()
            .join(".");
        trace!(name = %name, span = ?token.span, "symbol");
        symbols.push(Symbol {
            name,
            region: token.span,
        });
    }

    symbols
}

/// Byte column of `pos`: the distance to the last newline strictly before
/// it, or to the start of the document.
fn indent_of(source: &str, pos: u32) -> u32 {
    let pos = floor_boundary(source, pos);
    (pos - line_start(source, pos)) as u32
}

/// Clamp `pos` into the document and back onto a character boundary.
pub(crate) fn floor_boundary(source: &str, pos: u32) -> usize {
    let mut pos = (pos as usize).min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Byte offset of the start of the line containing `pos`.
pub(crate) fn line_start(source: &str, pos: usize) -> usize {
    source[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamlnav_scan::{KeyKind, scan_keys};

    fn names(source: &str) -> Vec<String> {
        let tokens = scan_keys(source);
        build_symbols(source, &tokens)
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn root_keys_have_no_ancestors() {
        assert_eq!(names("a: 1\nb: 2\n"), ["a", "b"]);
    }

    #[test]
    fn equal_indent_replaces_the_sibling() {
        assert_eq!(names("a:\n  b: 1\n  c: 2\n"), ["a", "a.b", "a.c"]);
    }

    #[test]
    fn dedent_pops_to_the_matching_level() {
        assert_eq!(names("a:\n  b: 1\nc: 2\n"), ["a", "a.b", "c"]);
    }

    #[test]
    fn dedent_to_root_pops_everything() {
        assert_eq!(
            names("a:\n  b:\n    c:\n      d: 1\ne: 2\n"),
            ["a", "a.b", "a.b.c", "a.b.c.d", "e"]
        );
    }

    #[test]
    fn output_matches_input_order_and_length() {
        let source = "a:\n  b: 1\nc:\n  d: 2\n";
        let tokens = scan_keys(source);
        let symbols = build_symbols(source, &tokens);
        assert_eq!(symbols.len(), tokens.len());
        for (symbol, token) in symbols.iter().zip(&tokens) {
            assert_eq!(symbol.region, token.span);
        }
    }

    #[test]
    fn region_is_the_key_token_not_the_subtree() {
        let source = "a:\n  b: 1\n";
        let symbols = build_symbols(source, &scan_keys(source));
        assert_eq!(symbols[0].region.slice(source), "a");
        assert_eq!(symbols[1].region.slice(source), "b");
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert!(build_symbols("", &[]).is_empty());
        assert!(build_symbols("no keys here\n", &scan_keys("no keys here\n")).is_empty());
    }

    #[test]
    fn pure_and_repeatable() {
        let source = "a:\n  b: 1\n";
        let tokens = scan_keys(source);
        assert_eq!(build_symbols(source, &tokens), build_symbols(source, &tokens));
    }

    #[test]
    fn quoted_segments_keep_their_quotes() {
        assert_eq!(names("a:\n  \"b c\": 1\n"), ["a", "a.\"b c\""]);
    }

    #[test]
    fn out_of_bounds_token_does_not_panic() {
        let token = KeyToken::new(KeyKind::Plain, Span::new(100, 104), "key");
        let symbols = build_symbols("a: 1", &[token]);
        assert_eq!(symbols[0].name, "key");
    }

    #[test]
    fn multibyte_content_before_a_key() {
        // Indentation is byte-based; non-ASCII earlier in the document
        // must not throw the columns off or panic.
        let source = "héllo: wörld\nplain:\n  nested: 1\n";
        assert_eq!(names(source), ["héllo", "plain", "plain.nested"]);
    }

    #[test]
    fn realistic_locale_document() {
        let source = "\
en:
  devise:
    sessions:
      new: Sign in
      destroy: Sign out
  errors:
    not_found: Not found
";
        insta::assert_snapshot!(names(source).join("\n"), @r"
        en
        en.devise
        en.devise.sessions
        en.devise.sessions.new
        en.devise.sessions.destroy
        en.errors
        en.errors.not_found
        ");
    }
}
