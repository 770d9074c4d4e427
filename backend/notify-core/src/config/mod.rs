use crate::error::config::ConfigError;
use crate::{APP_NAME, DEFAULT_PUBLIC_IP_ENDPOINT};

use common::{ErrorLocation, RedactedSecret};

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_ENV_VAR: &str = "SLACKBOT_CONFIG";
pub const SYSTEM_CONFIG_PATH: &str =
    const_format::concatcp!("/etc/", APP_NAME, "/", CONFIG_FILE_NAME);

// ============================================
// CONFIG STRUCTS
// ============================================

/// Where alerts are posted.
///
/// The endpoint is `url` followed by `secret`, so the public part of a webhook
/// URL can live in plain sight while the token stays redacted.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default)]
    pub secret: Option<RedactedSecret>,
}

impl WebhookConfig {
    pub fn endpoint(&self) -> RedactedSecret {
        match &self.secret {
            Some(secret) => RedactedSecret::joined(&self.url, secret),
            None => RedactedSecret::new(self.url.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub public_ip: bool,
    #[serde(default = "default_lookup_endpoint")]
    pub endpoint: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            public_ip: false,
            endpoint: default_lookup_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_lookup_endpoint() -> String {
    DEFAULT_PUBLIC_IP_ENDPOINT.to_string()
}

/// `<user config dir>/slackbot`, if the platform has one.
pub fn default_user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Pick the config file to load.
///
/// Precedence: explicit path (flag or `SLACKBOT_CONFIG`), then
/// `<user_config_dir>/config.toml` if it exists, then [`SYSTEM_CONFIG_PATH`].
pub fn resolve_config_path(explicit: Option<&Path>, user_config_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using explicit config path {}", path.display());
        return path.to_path_buf();
    }

    if let Some(dir) = user_config_dir {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            debug!("Using user config {}", candidate.display());
            return candidate;
        }
    }

    debug!("Falling back to {SYSTEM_CONFIG_PATH}");
    PathBuf::from(SYSTEM_CONFIG_PATH)
}

// ============================================
// IMPLEMENTATION
// ============================================

impl NotifierConfig {
    /// Load and validate the TOML config at `path`.
    ///
    /// Unlike UI preferences there is no sensible default webhook, so a missing
    /// file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&contents, path)?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text; `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: NotifierConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the webhook or lookup endpoint
    /// is empty, not http(s), or not a URL. Reasons never echo the webhook value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "webhook.url cannot be empty".to_string(),
            });
        }

        if !is_http_url(&self.webhook.url) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "webhook.url must start with http:// or https://".to_string(),
            });
        }

        if let Err(e) = Url::parse(self.webhook.endpoint().expose()) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("webhook endpoint is not a valid URL: {e}"),
            });
        }

        if !is_http_url(&self.lookup.endpoint) || Url::parse(&self.lookup.endpoint).is_err() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid lookup.endpoint: {}", self.lookup.endpoint),
            });
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
