//! Resolve which symbol the cursor is currently inside.

use tracing::trace;
use yamlnav_scan::Span;

use crate::Symbol;
use crate::path::{floor_boundary, line_start};

/// One selection: `anchor` is where it started, `caret` is the moving end.
/// The two are equal for a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: u32,
    pub caret: u32,
}

impl Selection {
    /// A zero-width selection at `pos`.
    pub fn caret(pos: u32) -> Self {
        Self {
            anchor: pos,
            caret: pos,
        }
    }

    /// Zero-width span at the caret.
    pub fn caret_span(&self) -> Span {
        Span::empty(self.caret)
    }

    /// The full extent, normalized so start <= end.
    pub fn span(&self) -> Span {
        Span::new(self.anchor.min(self.caret), self.anchor.max(self.caret))
    }
}

/// The selection set of a view. Hosts with multiple cursors supply one
/// [`Selection`] per cursor, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorState {
    pub selections: Vec<Selection>,
}

impl CursorState {
    /// A single zero-width cursor at `pos`.
    pub fn caret(pos: u32) -> Self {
        Self {
            selections: vec![Selection::caret(pos)],
        }
    }

    /// A single selection from `anchor` to `caret`.
    pub fn single(anchor: u32, caret: u32) -> Self {
        Self {
            selections: vec![Selection { anchor, caret }],
        }
    }
}

/// Find the symbol the cursor is currently inside, or `None`.
///
/// Probe regions are tried from most to least specific: the caret point,
/// the full selection extent, then each whole line the selection touches,
/// in document order. Within every probe the symbol list is scanned in
/// reverse, so the deepest key emitted for a region wins over its
/// shallower ancestors. More than one selection is ambiguous and resolves
/// to `None`, as does an empty symbol list.
pub fn resolve_current_symbol<'a>(
    source: &str,
    symbols: &'a [Symbol],
    cursor: &CursorState,
) -> Option<&'a Symbol> {
    if symbols.is_empty() {
        return None;
    }
    let [selection] = cursor.selections.as_slice() else {
        return None;
    };

    let mut probes = vec![selection.caret_span(), selection.span()];
    probes.extend(lines_covering(source, selection.span()));

    for probe in probes {
        for symbol in symbols.iter().rev() {
            if probe.intersects(symbol.region) {
                trace!(probe = ?probe, name = %symbol.name, "resolved current symbol");
                return Some(symbol);
            }
        }
    }
    None
}

/// Whole-line spans (newline excluded) covering `span`, clamped to the
/// document bounds.
pub fn lines_covering(source: &str, span: Span) -> Vec<Span> {
    let len = source.len() as u32;
    let start = floor_boundary(source, span.start);
    let end = span.end.min(len);

    let mut lines = Vec::new();
    let mut at = line_start(source, start) as u32;
    loop {
        let line_end = match source[at as usize..].find('\n') {
            Some(i) => at + i as u32,
            None => len,
        };
        lines.push(Span::new(at, line_end));
        if line_end >= end || line_end >= len {
            break;
        }
        at = line_end + 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_symbols;
    use yamlnav_scan::scan_keys;

    // Offsets: a = 0..1, b = 5..6, c = 12..13, d = 17..18
    const SOURCE: &str = "a:\n  b: 1\n  c: 2\nd: 3\n";

    fn symbols_for(source: &str) -> Vec<Symbol> {
        build_symbols(source, &scan_keys(source))
    }

    #[test]
    fn caret_on_a_key_resolves_it() {
        let symbols = symbols_for(SOURCE);
        let hit = resolve_current_symbol(SOURCE, &symbols, &CursorState::caret(5)).unwrap();
        assert_eq!(hit.name, "a.b");
    }

    #[test]
    fn caret_just_after_a_key_still_counts() {
        let symbols = symbols_for(SOURCE);
        let hit = resolve_current_symbol(SOURCE, &symbols, &CursorState::caret(6)).unwrap();
        assert_eq!(hit.name, "a.b");
    }

    #[test]
    fn caret_on_a_value_falls_back_to_the_line() {
        let symbols = symbols_for(SOURCE);
        let hit = resolve_current_symbol(SOURCE, &symbols, &CursorState::caret(8)).unwrap();
        assert_eq!(hit.name, "a.b");
    }

    #[test]
    fn selection_extent_is_probed_when_the_caret_misses() {
        let symbols = symbols_for(SOURCE);
        let cursor = CursorState::single(7, 3);
        let hit = resolve_current_symbol(SOURCE, &symbols, &cursor).unwrap();
        assert_eq!(hit.name, "a.b");
    }

    #[test]
    fn selection_spanning_keys_prefers_the_deepest() {
        let symbols = symbols_for(SOURCE);
        let cursor = CursorState::single(0, 6);
        let hit = resolve_current_symbol(SOURCE, &symbols, &cursor).unwrap();
        assert_eq!(hit.name, "a.b");
    }

    #[test]
    fn line_probes_run_in_document_order() {
        let source = "alpha: one\n  beta: two\n";
        let symbols = symbols_for(source);
        // The selection covers only value text on the first line and
        // leading indentation on the second; the first line's key wins.
        let cursor = CursorState::single(8, 12);
        let hit = resolve_current_symbol(source, &symbols, &cursor).unwrap();
        assert_eq!(hit.name, "alpha");
    }

    #[test]
    fn multiple_selections_are_ambiguous() {
        let symbols = symbols_for(SOURCE);
        let cursor = CursorState {
            selections: vec![Selection::caret(0), Selection::caret(17)],
        };
        assert!(resolve_current_symbol(SOURCE, &symbols, &cursor).is_none());
    }

    #[test]
    fn no_selection_resolves_nothing() {
        let symbols = symbols_for(SOURCE);
        assert!(resolve_current_symbol(SOURCE, &symbols, &CursorState::default()).is_none());
    }

    #[test]
    fn empty_symbol_list_resolves_nothing() {
        assert!(resolve_current_symbol(SOURCE, &[], &CursorState::caret(0)).is_none());
    }

    #[test]
    fn caret_on_a_keyless_line_resolves_nothing() {
        let source = "a: 1\n\n# comment\n";
        let symbols = symbols_for(source);
        let hit = resolve_current_symbol(source, &symbols, &CursorState::caret(10));
        assert!(hit.is_none());
    }

    #[test]
    fn out_of_bounds_caret_does_not_panic() {
        let symbols = symbols_for(SOURCE);
        assert!(resolve_current_symbol(SOURCE, &symbols, &CursorState::caret(10_000)).is_none());
    }

    #[test]
    fn lines_covering_excludes_newlines() {
        let spans = lines_covering("ab\ncd\n", Span::new(0, 4));
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(3, 5)]);
    }

    #[test]
    fn lines_covering_a_point_yields_its_line() {
        let spans = lines_covering("ab\ncd\n", Span::new(4, 4));
        assert_eq!(spans, vec![Span::new(3, 5)]);
    }
}
