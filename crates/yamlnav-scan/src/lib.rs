//! Finds mapping-key tokens in YAML-like text.
//!
//! This crate deliberately does not parse YAML. It locates block-style
//! mapping keys by line structure alone, which is all the path-building
//! layer needs: a token per key with its byte span and raw text. Flow
//! collections, anchors, and multi-document streams are out of scope.

mod scanner;
mod span;
mod token;

pub use scanner::{KeyScanner, scan_keys};
pub use span::Span;
pub use token::{KeyKind, KeyToken};
