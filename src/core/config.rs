//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.postdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostdeckConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LOG_FILE: &str = "postdeck.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub log_file: String,
}

impl ResolvedConfig {
    /// The host portion of the base URL, for the title bar.
    pub fn service_label(&self) -> String {
        self.base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.postdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".postdeck").join("config.toml"))
}

/// Load config from `~/.postdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PostdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PostdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PostdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Postdeck Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# base_url = "https://jsonplaceholder.typicode.com"   # Or set POSTDECK_BASE_URL

# [general]
# log_file = "postdeck.log"                           # Or set POSTDECK_LOG_FILE
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_*` come from CLI flags (None = not specified).
pub fn resolve(
    config: &PostdeckConfig,
    cli_base_url: Option<&str>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("POSTDECK_BASE_URL").ok())
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("POSTDECK_LOG_FILE").ok())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig { base_url, log_file }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PostdeckConfig::default();
        assert!(config.service.base_url.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PostdeckConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PostdeckConfig {
            service: ServiceConfig {
                base_url: Some("http://localhost:3000".to_string()),
            },
            general: GeneralConfig {
                log_file: Some("/tmp/deck.log".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://localhost:3000");
        assert_eq!(resolved.log_file, "/tmp/deck.log");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PostdeckConfig {
            service: ServiceConfig {
                base_url: Some("http://from-file".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli"), None);
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[service]
base_url = "http://192.168.1.20:4000"
"#;
        let config: PostdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("http://192.168.1.20:4000")
        );
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_service_label_strips_scheme() {
        let resolved = ResolvedConfig {
            base_url: "https://jsonplaceholder.typicode.com/".to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        };
        assert_eq!(resolved.service_label(), "jsonplaceholder.typicode.com");
    }
}
