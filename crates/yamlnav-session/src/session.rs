//! Per-buffer navigation state.

use std::time::Duration;

use tracing::debug;
use yamlnav_core::{CursorState, Symbol, build_symbols, resolve_current_symbol};
use yamlnav_scan::scan_keys;

use crate::NavSettings;

/// How long hosts should wait after an edit before refreshing symbols.
pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(400);

const STATUS_PREFIX: &str = "YAML path";

/// Navigation state for one buffer.
#[derive(Debug, Clone)]
pub struct NavSession {
    settings: NavSettings,
    symbols: Vec<Symbol>,
    current: Option<Symbol>,
    cursor: CursorState,
    revision: u64,
    source_len: u32,
}

impl NavSession {
    pub fn new(settings: NavSettings) -> Self {
        Self {
            settings,
            symbols: Vec::new(),
            current: None,
            cursor: CursorState::default(),
            revision: 0,
            source_len: 0,
        }
    }

    /// Record an edit. Returns the ticket a debounced refresh must
    /// present to [`refresh_scheduled`](Self::refresh_scheduled).
    pub fn note_edit(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    /// Rebuild the symbol list from `source` unconditionally (buffer
    /// load, plugin activation). Returns the symbol count.
    pub fn refresh(&mut self, source: &str) -> usize {
        let tokens = scan_keys(source);
        let mut symbols = build_symbols(source, &tokens);
        if self.settings.trim_leading_colon {
            for symbol in &mut symbols {
                symbol.name = strip_leading_colons(&symbol.name);
            }
        }
        debug!(count = symbols.len(), "refreshed symbols");

        self.symbols = symbols;
        self.source_len = source.len() as u32;
        // The cursor has not moved; the symbol under it may have.
        self.current = resolve_current_symbol(source, &self.symbols, &self.cursor).cloned();
        self.symbols.len()
    }

    /// Run a refresh scheduled by [`note_edit`](Self::note_edit).
    ///
    /// Fails with [`RefreshError::Stale`] when a newer edit was recorded
    /// after this one was scheduled; the refresh scheduled for that newer
    /// edit will do the work instead.
    pub fn refresh_scheduled(&mut self, source: &str, ticket: u64) -> Result<usize, RefreshError> {
        if ticket != self.revision {
            debug!(ticket, revision = self.revision, "discarding stale refresh");
            return Err(RefreshError::Stale {
                ticket,
                revision: self.revision,
            });
        }
        Ok(self.refresh(source))
    }

    /// Update the current symbol for a new cursor position.
    pub fn select(&mut self, source: &str, cursor: CursorState) -> Option<&Symbol> {
        self.current = resolve_current_symbol(source, &self.symbols, &cursor).cloned();
        self.cursor = cursor;
        self.current.as_ref()
    }

    /// All symbols of the buffer, in document order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The symbol the cursor was last resolved to.
    pub fn current(&self) -> Option<&Symbol> {
        self.current.as_ref()
    }

    /// Entries for a quick panel, in document order.
    pub fn symbol_names(&self) -> Vec<&str> {
        self.symbols.iter().map(|s| s.name.as_str()).collect()
    }

    /// Status-bar text for the current symbol.
    pub fn status_text(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|symbol| format!("{STATUS_PREFIX}: {}", symbol.name))
    }

    /// Clipboard payload for the current symbol. When the settings ask
    /// for it and `file_name` looks like a locale catalogue, the leading
    /// language tag is dropped.
    pub fn copy_text(&self, file_name: Option<&str>) -> Option<String> {
        let current = self.current.as_ref()?;
        let mut name = current.name.as_str();
        if self.settings.trim_language_tag_on_copy_from_locales
            && file_name.is_some_and(|f| is_locale_file(f, &self.settings.locale_filename_markers))
        {
            name = strip_language_tag(name);
        }
        Some(name.to_string())
    }

    /// Caret position for jumping to the symbol at `index`: just past the
    /// key token, clamped to the end of the last refreshed source.
    pub fn jump_target(&self, index: usize) -> Option<u32> {
        let symbol = self.symbols.get(index)?;
        Some((symbol.region.end + 1).min(self.source_len))
    }
}

/// Error from [`NavSession::refresh_scheduled`].
#[derive(Debug, PartialEq, Eq)]
pub enum RefreshError {
    /// A newer edit was recorded after this refresh was scheduled.
    Stale { ticket: u64, revision: u64 },
}

impl std::fmt::Display for RefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshError::Stale { ticket, revision } => {
                write!(f, "Stale refresh: ticket {ticket}, buffer is at revision {revision}")
            }
        }
    }
}

impl std::error::Error for RefreshError {}

/// Remove `:` from the start of every path segment (`:en.:key` becomes
/// `en.key`, for Ruby-symbol-style YAML).
fn strip_leading_colons(name: &str) -> String {
    name.split('.')
        .map(|segment| segment.strip_prefix(':').unwrap_or(segment))
        .collect::<Vec<_>>()
        .join(".")
}

/// Drop the first path segment when there is more than one.
fn strip_language_tag(name: &str) -> &str {
    match name.split_once('.') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    }
}

fn is_locale_file(file_name: &str, markers: &[String]) -> bool {
    let file_name = file_name.to_lowercase();
    markers
        .iter()
        .any(|marker| file_name.contains(&marker.to_lowercase()))
}
