//! Configuration handling for the wizard

use crate::schema::FormVariant;
use crate::webhook::DEFAULT_WEBHOOK_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the webhook endpoint
pub const WEBHOOK_URL_ENV: &str = "QUOTE_WIZARD_WEBHOOK_URL";
/// Environment override for the form variant
pub const VARIANT_ENV: &str = "QUOTE_WIZARD_VARIANT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const LOG_FILE_NAME: &str = "quote-wizard.log";

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Webhook endpoint receiving submissions
    pub webhook_url: Option<String>,
    /// "contact" or "project"
    pub form_variant: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "intezia", "quote-wizard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file in the platform data dir
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "intezia", "quote-wizard")
            .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: WizardConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint from the environment, then the file, then the built-in default
    pub fn webhook_url(&self) -> String {
        resolve_webhook_url(std::env::var(WEBHOOK_URL_ENV).ok(), self.webhook_url.as_deref())
    }

    /// Variant from the environment, then the file, then the default
    pub fn variant(&self) -> FormVariant {
        resolve_variant(std::env::var(VARIANT_ENV).ok(), self.form_variant.as_deref())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

/// Open a log file for appending, creating its directory
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

fn resolve_webhook_url(env: Option<String>, file: Option<&str>) -> String {
    env.filter(|url| !url.trim().is_empty())
        .or_else(|| file.filter(|url| !url.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string())
}

fn resolve_variant(env: Option<String>, file: Option<&str>) -> FormVariant {
    let Some(name) = env.as_deref().or(file) else {
        return FormVariant::default();
    };
    FormVariant::from_name(name).unwrap_or_else(|| {
        tracing::warn!("Unknown form variant '{name}', using the default");
        FormVariant::default()
    })
}
