//! Configuration loading for hexcast.
//!
//! Configuration lives at `~/.hexcast/config.toml`:
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [api_keys]
//! google = "AIza..."
//!
//! [narration]
//! enabled = true
//! model = "gemini-2.5-flash-preview-04-17"
//! ```
//!
//! The `GEMINI_API_KEY` environment variable overrides the file-based key.
//! Narration is an explicit optional capability: [`HexcastConfig::narration_config`]
//! resolves it once at startup, and the rest of the application only ever
//! sees `Option<NarrationConfig>`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

use hexcast_providers::NarrationConfig;
use hexcast_types::ApiKey;
use hexcast_types::ui::UiOptions;

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct HexcastConfig {
    pub app: Option<AppConfig>,
    pub api_keys: Option<ApiKeys>,
    pub narration: Option<NarrationSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for lines, icons, and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the line-reveal animation and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Default, Deserialize)]
pub struct ApiKeys {
    pub google: Option<String>,
}

// Manual Debug impl to prevent leaking API keys in logs.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mask(opt: Option<&String>) -> &'static str {
            if opt.is_some() { "[REDACTED]" } else { "None" }
        }
        f.debug_struct("ApiKeys")
            .field("google", &mask(self.google.as_ref()))
            .finish()
    }
}

/// Narration service settings.
#[derive(Debug, Deserialize)]
pub struct NarrationSection {
    /// Enable narration when an API key is available. Default: true.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Override the narration model.
    pub model: Option<String>,
}

impl Default for NarrationSection {
    fn default() -> Self {
        Self {
            enabled: true,
            model: None,
        }
    }
}

impl HexcastConfig {
    /// Canonical config file location: `~/.hexcast/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".hexcast").join("config.toml"))
    }

    /// Load the config file if present. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            tracing::warn!("Could not determine home directory; using defaults");
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => Ok(Some(config)),
            Err(e) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Rendering toggles for the TUI.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    /// Resolve the optional narration capability.
    ///
    /// Returns `None` when narration is disabled or no API key is available;
    /// the application then runs with narration features absent.
    #[must_use]
    pub fn narration_config(&self) -> Option<NarrationConfig> {
        self.resolve_narration(env::var("GEMINI_API_KEY").ok())
    }

    fn resolve_narration(&self, env_key: Option<String>) -> Option<NarrationConfig> {
        let section = self.narration.as_ref();
        if section.is_some_and(|n| !n.enabled) {
            tracing::info!("Narration disabled by configuration");
            return None;
        }

        let file_key = self
            .api_keys
            .as_ref()
            .and_then(|keys| keys.google.clone());
        let key = env_key
            .filter(|k| !k.trim().is_empty())
            .or(file_key)
            .filter(|k| !k.trim().is_empty())?;

        let mut config = NarrationConfig::new(ApiKey::new(key));
        if let Some(model) = section.and_then(|n| n.model.clone()) {
            config = config.with_model(model);
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiKeys, HexcastConfig};
    use hexcast_providers::DEFAULT_NARRATION_MODEL;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = HexcastConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn parses_full_config() {
        let (_dir, path) = write_config(
            r#"
            [app]
            ascii_only = true
            reduced_motion = true

            [api_keys]
            google = "AIza-test"

            [narration]
            model = "gemini-custom"
            "#,
        );
        let config = HexcastConfig::load_from(&path).unwrap().unwrap();

        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(options.reduced_motion);

        let narration = config.resolve_narration(None).unwrap();
        assert_eq!(narration.api_key(), "AIza-test");
        assert_eq!(narration.model(), "gemini-custom");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let (_dir, path) = write_config("[app\nascii_only = yes");
        let err = HexcastConfig::load_from(&path).unwrap_err();
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn env_key_overrides_file_key() {
        let (_dir, path) = write_config(
            r#"
            [api_keys]
            google = "file-key"
            "#,
        );
        let config = HexcastConfig::load_from(&path).unwrap().unwrap();
        let narration = config
            .resolve_narration(Some("env-key".to_string()))
            .unwrap();
        assert_eq!(narration.api_key(), "env-key");
    }

    #[test]
    fn blank_env_key_falls_back_to_file_key() {
        let (_dir, path) = write_config(
            r#"
            [api_keys]
            google = "file-key"
            "#,
        );
        let config = HexcastConfig::load_from(&path).unwrap().unwrap();
        let narration = config.resolve_narration(Some("  ".to_string())).unwrap();
        assert_eq!(narration.api_key(), "file-key");
    }

    #[test]
    fn no_key_means_no_narration() {
        let config = HexcastConfig::default();
        assert!(config.resolve_narration(None).is_none());
    }

    #[test]
    fn disabled_narration_ignores_keys() {
        let (_dir, path) = write_config(
            r#"
            [api_keys]
            google = "file-key"

            [narration]
            enabled = false
            "#,
        );
        let config = HexcastConfig::load_from(&path).unwrap().unwrap();
        assert!(config.resolve_narration(Some("env-key".to_string())).is_none());
    }

    #[test]
    fn defaults_use_the_stock_model() {
        let config = HexcastConfig::default();
        let narration = config.resolve_narration(Some("k".to_string())).unwrap();
        assert_eq!(narration.model(), DEFAULT_NARRATION_MODEL);
    }

    #[test]
    fn api_keys_debug_is_redacted() {
        let keys = ApiKeys {
            google: Some("AIza-secret".to_string()),
        };
        let formatted = format!("{keys:?}");
        assert!(!formatted.contains("AIza-secret"));
        assert!(formatted.contains("[REDACTED]"));
    }
}
