use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_URL_VAR: &str = "GEMINI_API_URL";

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Credentials for the generative-language API.
///
/// Both fields stay optional here: a server without them still starts and
/// serves the workbench, but every relay call fails until they are set.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

// Hand-written so the key never ends up in a log line.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Key and URL, both known to be present and non-blank.
#[derive(Clone)]
pub struct UpstreamEndpoint {
    pub api_key: String,
    pub api_url: String,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_url: Some(api_url.into()),
        }
    }

    pub fn endpoint(&self) -> Option<UpstreamEndpoint> {
        let api_key = non_blank(self.api_key.as_deref())?;
        let api_url = non_blank(self.api_url.as_deref())?;
        Some(UpstreamEndpoint {
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    /// Load a config file, picking the format from the extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = load_text_file(path)?;
        let content = substitute_env(&content);

        let path_lower = path.to_lowercase();
        let config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config: {}", path))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config: {}", path))?
        };
        Ok(config)
    }

    /// Probe the usual locations, falling back to defaults when none exists.
    /// An explicit `CONFIG_PATH` must point at a file.
    pub fn discover() -> Result<Self> {
        let config = Self::discover_from(std::env::var("CONFIG_PATH").ok().as_deref())?;
        Ok(config.with_env_overrides())
    }

    /// File lookup behind `discover`, without the env overrides.
    pub fn discover_from(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            if !Path::new(path).exists() {
                anyhow::bail!("CONFIG_PATH points to a missing file: {}", path);
            }
            let config = Self::load(path)?;
            tracing::info!("Loaded configuration from: {}", path);
            return Ok(config);
        }

        let candidates = ["conf.yaml", "conf.json"];
        for path in candidates {
            if !Path::new(path).exists() {
                debug!("No config at {}", path);
                continue;
            }
            let config = Self::load(path)?;
            tracing::info!("Loaded configuration from: {}", path);
            return Ok(config);
        }

        debug!("No config file found, using defaults. Tried: {:?}", candidates);
        Ok(Config::default())
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup. Split out from
    /// `with_env_overrides` so tests don't have to touch the process env.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR) {
            self.upstream.api_key = Some(key);
        }
        if let Some(url) = lookup(API_URL_VAR) {
            self.upstream.api_url = Some(url);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        self
    }
}

/// Replace `${VAR}` placeholders. Unset variables become empty, so an
/// unset credential reads as missing rather than as the literal placeholder.
pub fn substitute_env(content: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

fn load_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read config file: {}", path))?;
    // decode() strips a leading BOM
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        anyhow::bail!("Config file is not valid UTF-8: {}", path);
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "static");
        assert!(!config.upstream.is_configured());
    }

    #[test]
    fn loads_yaml_with_partial_sections() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  port: 8080\nupstream:\n  api_url: https://example.test/v1").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.api_url.as_deref(), Some("https://example.test/v1"));
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn loads_json_with_bom() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"\xEF\xBB\xBF{\"upstream\": {\"api_key\": \"k\", \"api_url\": \"u\"}}")
            .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.upstream.is_configured());
    }

    #[test]
    fn unset_placeholder_reads_as_missing() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "upstream:\n  api_key: ${{CLEARWRITE_SURELY_UNSET_VAR}}\n  api_url: https://example.test").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.upstream.api_key.is_none());
        assert!(!config.upstream.is_configured());
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = Config::default().with_overrides(|name| match name {
            API_KEY_VAR => Some("secret".to_string()),
            API_URL_VAR => Some("https://example.test".to_string()),
            "PORT" => Some("9999".to_string()),
            _ => None,
        });
        assert_eq!(config.server.port, 9999);
        let endpoint = config.upstream.endpoint().unwrap();
        assert_eq!(endpoint.api_key, "secret");
        assert_eq!(endpoint.api_url, "https://example.test");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("conf.yaml");

        let err = Config::discover_from(missing.to_str()).unwrap_err();
        assert!(err.to_string().contains("CONFIG_PATH"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  port: 4242").unwrap();

        let config = Config::discover_from(file.path().to_str()).unwrap();
        assert_eq!(config.server.port, 4242);
    }

    #[test]
    fn blank_credentials_do_not_count() {
        let upstream = UpstreamConfig::new("  ", "https://example.test");
        assert!(upstream.endpoint().is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let upstream = UpstreamConfig::new("top-secret", "https://example.test");
        let printed = format!("{:?}", upstream);
        assert!(!printed.contains("top-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
