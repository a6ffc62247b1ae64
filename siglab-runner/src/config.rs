//! Run configuration — a YAML key-value document with three required keys.
//!
//! Validation works over the generic document rather than a derive struct so
//! the missing-key check order is fixed and extra keys pass through ignored.

use serde_yaml::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Required keys, checked in this order; the first missing one is reported.
const REQUIRED_KEYS: [&str; 3] = ["seed", "window", "version"];

/// Errors from the config layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config is not a key-value mapping")]
    NotAMapping,

    #[error("missing required key '{0}' in config")]
    MissingKey(&'static str),

    #[error("invalid value for config key '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Validated run configuration.
///
/// Extra keys in the document are tolerated and ignored. The seed is not
/// applied to any global state here; the orchestrator builds an explicit
/// `RunRng` from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub window: usize,
    pub version: String,
}

impl RunConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let doc: Value = serde_yaml::from_str(contents)?;
        if !doc.is_mapping() {
            return Err(ConfigError::NotAMapping);
        }

        // Presence first, in fixed order; a null value counts as missing.
        for key in REQUIRED_KEYS {
            match doc.get(key) {
                Some(value) if !value.is_null() => {}
                _ => return Err(ConfigError::MissingKey(key)),
            }
        }

        let seed = doc
            .get("seed")
            .and_then(Value::as_u64)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "seed",
                reason: "expected a non-negative integer".into(),
            })?;

        let window = doc
            .get("window")
            .and_then(Value::as_u64)
            .filter(|&w| w >= 1)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "window",
                reason: "expected a positive integer".into(),
            })? as usize;

        let version = doc
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "version",
                reason: "expected a string".into(),
            })?
            .to_string();

        Ok(RunConfig {
            seed,
            window,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_full_config() {
        let config = RunConfig::from_yaml("seed: 42\nwindow: 5\nversion: v2\n").unwrap();
        assert_eq!(
            config,
            RunConfig {
                seed: 42,
                window: 5,
                version: "v2".into(),
            }
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let config =
            RunConfig::from_yaml("seed: 1\nwindow: 3\nversion: v1\nsymbol: SPY\nnotes: hi\n")
                .unwrap();
        assert_eq!(config.window, 3);
    }

    #[test]
    fn missing_window_is_named() {
        let err = RunConfig::from_yaml("seed: 1\nversion: v1\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("window")));
    }

    #[test]
    fn missing_keys_reported_in_fixed_order() {
        // Both seed and version are absent; seed is checked first.
        let err = RunConfig::from_yaml("window: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("seed")));
    }

    #[test]
    fn null_value_counts_as_missing() {
        let err = RunConfig::from_yaml("seed: 1\nwindow: null\nversion: v1\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("window")));
    }

    #[test]
    fn zero_window_is_invalid() {
        let err = RunConfig::from_yaml("seed: 1\nwindow: 0\nversion: v1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "window", .. }));
    }

    #[test]
    fn non_integer_seed_is_invalid() {
        let err = RunConfig::from_yaml("seed: banana\nwindow: 3\nversion: v1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "seed", .. }));
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = RunConfig::from_yaml("just a string").unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RunConfig::from_file("/nonexistent/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
