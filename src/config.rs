use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level dreamspell configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DreamspellConfig {
    /// Persisted user preferences.
    #[serde(default)]
    pub user: UserConfig,
}

/// User preferences: both optional, read once at startup.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Birth date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub birthday: Option<String>,

    /// Free-text location name.
    #[serde(default)]
    pub location: Option<String>,
}

/// Loads the preference file, falling back to defaults when it is absent.
///
/// A missing file is not an error (preferences are optional); a present
/// but malformed file is.
pub fn load(path: &Path) -> Result<DreamspellConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no preference file, using defaults");
        return Ok(DreamspellConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config: DreamspellConfig = toml::from_str("").unwrap();
        assert!(config.user.birthday.is_none());
        assert!(config.user.location.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: DreamspellConfig = toml::from_str(
            r#"
            [user]
            birthday = "1987-07-26"
            location = "Palenque, Chiapas"
            "#,
        )
        .unwrap();
        assert_eq!(config.user.birthday.as_deref(), Some("1987-07-26"));
        assert_eq!(config.user.location.as_deref(), Some("Palenque, Chiapas"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<DreamspellConfig, _> = toml::from_str("[user]\nbirthdate = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("/nonexistent/dreamspell.toml")).unwrap();
        assert!(config.user.birthday.is_none());
    }
}
