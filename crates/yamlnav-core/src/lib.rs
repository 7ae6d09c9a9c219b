//! Indentation-based key-path indexing for YAML-like documents.
//!
//! Two pure functions form the core: [`build_symbols`] turns an ordered
//! stream of mapping-key tokens into dot-joined key paths, inferring
//! nesting from indentation alone, and [`resolve_current_symbol`] answers
//! "which path is the cursor inside" against that list. Neither holds
//! state across calls; hosts own the symbol list and any refresh policy.

mod path;
mod resolve;

pub use path::{Symbol, build_symbols};
pub use resolve::{CursorState, Selection, lines_covering, resolve_current_symbol};
pub use yamlnav_scan::{KeyKind, KeyToken, Span};
