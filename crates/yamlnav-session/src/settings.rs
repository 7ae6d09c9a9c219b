//! User settings for YAML path navigation.

use serde::{Deserialize, Serialize};

/// Settings understood by [`NavSession`](crate::NavSession).
///
/// Hosts typically map these from their own settings store; a JSON helper
/// is provided for hosts that keep plain files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    /// Strip Ruby-symbol-style colons (`:key`) from the start of every
    /// displayed path segment.
    pub trim_leading_colon: bool,

    /// When copying from a locale file, drop the leading language tag:
    /// `en.greeting.hello` is copied as `greeting.hello`.
    pub trim_language_tag_on_copy_from_locales: bool,

    /// Case-insensitive file-name substrings that mark a file as a locale
    /// catalogue.
    pub locale_filename_markers: Vec<String>,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            trim_leading_colon: false,
            trim_language_tag_on_copy_from_locales: true,
            locale_filename_markers: vec!["locale".to_string(), "i18n".to_string()],
        }
    }
}

impl NavSettings {
    /// Parse settings from a JSON document. Missing fields keep their
    /// defaults; unknown fields are ignored.
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(content).map_err(|e| SettingsError::Parse {
            error: e.to_string(),
        })
    }
}

/// Error parsing settings.
#[derive(Debug)]
pub enum SettingsError {
    Parse { error: String },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Parse { error } => {
                write!(f, "Failed to parse settings: {}", error)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = NavSettings::default();
        assert!(!settings.trim_leading_colon);
        assert!(settings.trim_language_tag_on_copy_from_locales);
        assert_eq!(settings.locale_filename_markers, ["locale", "i18n"]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = NavSettings::from_json(r#"{"trim_leading_colon": true}"#).unwrap();
        assert!(settings.trim_leading_colon);
        assert!(settings.trim_language_tag_on_copy_from_locales);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(NavSettings::from_json("not json").is_err());
    }
}
