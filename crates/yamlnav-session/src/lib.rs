//! Host-facing session state for YAML path navigation.
//!
//! An editor host owns one [`NavSession`] per buffer and drives it from
//! its own lifecycle hooks: call [`NavSession::note_edit`] on every
//! modification, schedule a refresh [`REFRESH_DEBOUNCE`] later with the
//! returned ticket, and call [`NavSession::select`] when the cursor
//! moves. The session keeps the symbol list, the current symbol, and
//! everything the host surfaces: status-bar text, quick-panel entries,
//! clipboard payloads, and jump targets.

mod session;
mod settings;

pub use session::{NavSession, REFRESH_DEBOUNCE, RefreshError};
pub use settings::{NavSettings, SettingsError};
