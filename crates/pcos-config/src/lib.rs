//! Server configuration for pcos-predict.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! JSON file named by `PCOS_CONFIG`, and `PCOS_*` environment variables
//! (a `.env` file is honoured).

use pcos_engine::ArtifactPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment keys
// ─────────────────────────────────────────────────────────────────────────────

pub const ENV_CONFIG: &str = "PCOS_CONFIG";
pub const ENV_HOST: &str = "PCOS_HOST";
pub const ENV_PORT: &str = "PCOS_PORT";
pub const ENV_MODEL_DIR: &str = "PCOS_MODEL_DIR";
pub const ENV_IMPUTER_FILE: &str = "PCOS_IMPUTER_FILE";
pub const ENV_SCALER_FILE: &str = "PCOS_SCALER_FILE";
pub const ENV_CLASSIFIER_FILE: &str = "PCOS_CLASSIFIER_FILE";
pub const ENV_CORS_ORIGINS: &str = "PCOS_CORS_ORIGINS";

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the artifact files.
    pub model_dir: PathBuf,
    pub imputer_file: String,
    pub scaler_file: String,
    pub classifier_file: String,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            model_dir: PathBuf::from("model"),
            imputer_file: ArtifactPaths::DEFAULT_IMPUTER.into(),
            scaler_file: ArtifactPaths::DEFAULT_SCALER.into(),
            classifier_file: ArtifactPaths::DEFAULT_CLASSIFIER.into(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads `.env`, the optional config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match std::env::var(ENV_CONFIG) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overrides fields from `lookup`, which maps an environment key to its value.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup(ENV_MODEL_DIR) {
            self.model_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(ENV_IMPUTER_FILE) {
            self.imputer_file = file;
        }
        if let Some(file) = lookup(ENV_SCALER_FILE) {
            self.scaler_file = file;
        }
        if let Some(file) = lookup(ENV_CLASSIFIER_FILE) {
            self.classifier_file = file;
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            self.cors_origins = parse_origins(&origins);
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            imputer: self.model_dir.join(&self.imputer_file),
            scaler: self.model_dir.join(&self.scaler_file),
            classifier: self.model_dir.join(&self.classifier_file),
        }
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}

// "*" or an empty list means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(config.allows_any_origin());

        let paths = config.artifact_paths();
        assert_eq!(paths, ArtifactPaths::in_dir("model"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .apply_env(env(&[
                (ENV_HOST, "127.0.0.1"),
                (ENV_PORT, "8080"),
                (ENV_MODEL_DIR, "/srv/models"),
                (ENV_CLASSIFIER_FILE, "svc.json"),
                (ENV_CORS_ORIGINS, "http://localhost:3000, https://app.example.com"),
            ]))
            .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.artifact_paths().classifier,
            PathBuf::from("/srv/models/svc.json")
        );
        assert_eq!(
            config.artifact_paths().scaler,
            PathBuf::from("/srv/models/scaler.json")
        );
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_wildcard_origin() {
        let config = ServerConfig::default()
            .apply_env(env(&[(ENV_CORS_ORIGINS, "http://a.test,*")]))
            .unwrap();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::default()
            .apply_env(env(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_PORT, .. }));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{ "port": 9000, "model_dir": "artifacts" }"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.artifact_paths().imputer, PathBuf::from("artifacts/imputer.json"));
    }
}
