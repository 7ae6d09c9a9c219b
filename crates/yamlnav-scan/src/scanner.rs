//! Line-oriented scanner for block-style mapping keys.

use crate::{KeyKind, KeyToken, Span};
use tracing::trace;

/// Scans a YAML-like document for mapping-key tokens.
///
/// At most one key is emitted per line, in ascending span order. Lines
/// that cannot hold a block-style key are skipped: comments, document
/// markers, directives, explicit complex keys (`? `), flow-collection
/// lines, and the bodies of block scalars.
#[derive(Clone)]
pub struct KeyScanner<'src> {
    /// The full document.
    source: &'src str,
    /// The unscanned suffix of `source`.
    remaining: &'src str,
    /// Byte position of `remaining` within `source`.
    pos: u32,
    /// When inside a block scalar, the indentation of the line that
    /// introduced it; lines indented further are scalar content.
    block_indent: Option<u32>,
}

impl<'src> KeyScanner<'src> {
    /// Create a scanner over the given document.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
            block_indent: None,
        }
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The current line without its terminator.
    fn current_line(&self) -> &'src str {
        let line = match self.remaining.find('\n') {
            Some(end) => &self.remaining[..end],
            None => self.remaining,
        };
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Advance past the current line and its terminator.
    fn skip_line(&mut self) {
        match self.remaining.find('\n') {
            Some(end) => {
                self.pos += end as u32 + 1;
                self.remaining = &self.remaining[end + 1..];
            }
            None => {
                self.pos += self.remaining.len() as u32;
                self.remaining = "";
            }
        }
    }

    /// Find the next mapping key.
    pub fn next_key(&mut self) -> Option<KeyToken<'src>> {
        while !self.is_eof() {
            let line_start = self.pos;
            let line = self.current_line();

            if let Some(block_indent) = self.block_indent {
                if line.trim().is_empty() || indent_width(line) > block_indent {
                    self.skip_line();
                    continue;
                }
                self.block_indent = None;
            }

            let token = self.scan_line(line_start, line);
            self.skip_line();
            if let Some(token) = token {
                trace!(span = ?token.span, text = token.text, "key token");
                return Some(token);
            }
        }
        None
    }

    /// Look for a key on one line. `line_start` is the line's byte offset
    /// within the document.
    fn scan_line(&mut self, line_start: u32, line: &'src str) -> Option<KeyToken<'src>> {
        // Indentation, then any number of sequence entry markers: keys in
        // sequence items ("- name: x") are ordinary mapping keys, and the
        // indent that matters is the column the key itself starts at.
        let mut at = indent_width(line) as usize;
        loop {
            let rest = &line[at..];
            if rest.starts_with('-') && (rest.len() == 1 || rest[1..].starts_with([' ', '\t'])) {
                if rest.len() == 1 {
                    // Bare "-": the entry's value starts on a later line.
                    return None;
                }
                at += 1 + indent_width(&rest[1..]) as usize;
                continue;
            }
            break;
        }

        let rest = &line[at..];
        let first = rest.chars().next()?;
        match first {
            '#' | '%' | '{' | '[' => return None,
            // Explicit complex keys hold nested mappings or sequences in
            // key position; those never contribute to a path.
            '?' if rest.len() == 1 || rest[1..].starts_with([' ', '\t']) => return None,
            _ => {}
        }
        if at == 0
            && (rest == "---" || rest.starts_with("--- ") || rest == "..." || rest.starts_with("... "))
        {
            return None;
        }

        // A value-only block scalar introducer ("- |") has no key but
        // still opens a block whose body must not be scanned.
        if is_block_scalar_value(rest) {
            self.block_indent = Some(indent_width(line));
            return None;
        }

        let (kind, key_end, colon) = match first {
            '"' => {
                let quote_end = close_quote(rest, '"')?;
                let colon = colon_after(rest, quote_end)?;
                (KeyKind::DoubleQuoted, quote_end, colon)
            }
            '\'' => {
                let quote_end = close_quote(rest, '\'')?;
                let colon = colon_after(rest, quote_end)?;
                (KeyKind::SingleQuoted, quote_end, colon)
            }
            _ => {
                let colon = plain_key_colon(rest)?;
                let key_end = rest[..colon].trim_end().len();
                if key_end == 0 {
                    return None;
                }
                (KeyKind::Plain, key_end, colon)
            }
        };

        if is_block_scalar_value(&rest[colon + 1..]) {
            self.block_indent = Some(indent_width(line));
        }

        let start = line_start + at as u32;
        let span = Span::new(start, start + key_end as u32);
        Some(KeyToken::new(kind, span, span.slice(self.source)))
    }
}

impl<'src> Iterator for KeyScanner<'src> {
    type Item = KeyToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_key()
    }
}

/// Collect every mapping-key token in `source`, in document order.
pub fn scan_keys(source: &str) -> Vec<KeyToken<'_>> {
    KeyScanner::new(source).collect()
}

/// Leading spaces and tabs on a line, in bytes (both are single-byte).
fn indent_width(line: &str) -> u32 {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count() as u32
}

/// Index just past the closing quote of a quoted key at the start of
/// `rest`, or `None` if the quote never closes on this line.
fn close_quote(rest: &str, quote: char) -> Option<usize> {
    let mut iter = rest.char_indices();
    iter.next(); // opening quote
    while let Some((i, c)) = iter.next() {
        if c == '\\' && quote == '"' {
            iter.next();
        } else if c == quote {
            // '' escapes a quote inside single-quoted keys
            if quote == '\'' && rest[i + 1..].starts_with('\'') {
                iter.next();
                continue;
            }
            return Some(i + 1);
        }
    }
    None
}

/// Index of the `:` that follows a quoted key ending at `from`, allowing
/// spaces between the quote and the colon. The colon must be followed by
/// whitespace or end of line.
fn colon_after(rest: &str, from: usize) -> Option<usize> {
    let after = &rest[from..];
    let ws = after.len() - after.trim_start_matches([' ', '\t']).len();
    let at_colon = &after[ws..];
    if !at_colon.starts_with(':') {
        return None;
    }
    let value = &at_colon[1..];
    if value.is_empty() || value.starts_with([' ', '\t']) {
        Some(from + ws)
    } else {
        None
    }
}

/// Byte index of the `:` terminating a plain key, where the colon must be
/// followed by whitespace or end of line. Returns `None` when a trailing
/// comment starts first or no such colon exists.
fn plain_key_colon(rest: &str) -> Option<usize> {
    let mut prev_ws = false;
    let mut iter = rest.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        match c {
            ':' => match iter.peek() {
                None | Some((_, ' ' | '\t')) => return Some(i),
                _ => {}
            },
            '#' if prev_ws => return None,
            _ => {}
        }
        prev_ws = c == ' ' || c == '\t';
    }
    None
}

/// Whether a value consists solely of a block scalar introducer (`|` or
/// `>` plus chomping/indentation modifiers, optionally a comment).
fn is_block_scalar_value(value: &str) -> bool {
    let value = value.trim_start_matches([' ', '\t']);
    let Some(modifiers) = value.strip_prefix(['|', '>']) else {
        return false;
    };
    let tail = modifiers.trim_start_matches(|c: char| c == '+' || c == '-' || c.is_ascii_digit());
    tail.is_empty() || tail.starts_with([' ', '\t'])
}
