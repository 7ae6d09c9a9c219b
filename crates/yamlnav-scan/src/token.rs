//! Key tokens produced by the scanner.

use crate::Span;

/// How a mapping key was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Bare key: `name:`
    Plain,
    /// Single-quoted key: `'name':`
    SingleQuoted,
    /// Double-quoted key: `"name":`
    DoubleQuoted,
}

/// A mapping-key occurrence with its span and source text slice.
///
/// `text` is the exact slice between `span.start` and `span.end`; for
/// quoted keys that includes the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken<'src> {
    /// How the key was written.
    pub kind: KeyKind,
    /// The span in the source text.
    pub span: Span,
    /// The source text of this key.
    pub text: &'src str,
}

impl<'src> KeyToken<'src> {
    /// Create a new key token.
    pub fn new(kind: KeyKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }
}
