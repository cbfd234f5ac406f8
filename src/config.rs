//! Configuration handling for the TUI

use crate::auth::{default_accounts, Account};
use crate::state::enrollment::{ValidationPolicy, DEFAULT_DISMISS_DELAY};
use crate::state::RoleMenuConfig;
use crate::submission::DEFAULT_API_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "PPDB_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the PPDB backend
    pub api_base_url: Option<String>,
    /// Seconds the success notification stays visible
    pub notification_secs: Option<u64>,
    /// Whether advancing requires valid input
    pub validation: Option<ValidationPolicy>,
    /// Per-role dashboard routes, replacing the defaults for the roles listed
    pub role_menus: Option<RoleMenuConfig>,
    /// Staff accounts accepted at login
    pub accounts: Option<Vec<Account>>,
}

impl AppConfig {
    /// Platform directories for config, data and logs
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("id.sch", "smanusantara", "ppdb-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, writing a template on first run
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if path.exists() {
            return Self::load_from(&path);
        }
        let template = Self::template();
        template.save_to(&path)?;
        tracing::info!(path = %path.display(), "wrote default configuration");
        Ok(template)
    }

    /// Defaults spelled out so users can see what to edit
    fn template() -> Self {
        Self {
            api_base_url: Some(DEFAULT_API_URL.to_string()),
            notification_secs: Some(DEFAULT_DISMISS_DELAY.as_secs()),
            validation: Some(ValidationPolicy::default()),
            role_menus: None,
            accounts: None,
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Apply environment overrides on top of the file values
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = Some(url);
            }
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn notification_delay(&self) -> Duration {
        self.notification_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_DISMISS_DELAY)
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        self.validation.unwrap_or_default()
    }

    /// Default role menus with any configured overrides applied
    pub fn role_menus(&self) -> RoleMenuConfig {
        let defaults = RoleMenuConfig::default();
        match &self.role_menus {
            Some(overrides) => defaults.merge(overrides.clone()),
            None => defaults,
        }
    }

    /// Configured accounts, or the demo accounts when none are set
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.clone().unwrap_or_else(default_accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;
    use pretty_assertions::assert_eq;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("ppdb-tui-config-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:5001");
        assert_eq!(config.notification_delay(), Duration::from_secs(5));
        assert_eq!(config.validation_policy(), ValidationPolicy::Permissive);
        assert_eq!(config.role_menus(), RoleMenuConfig::default());
        assert_eq!(config.accounts().len(), 3);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
        assert!(parsed.accounts.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"validation": "strict", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.validation_policy(), ValidationPolicy::Strict);
    }

    #[test]
    fn test_role_menu_override() {
        let json = r#"{"role_menus": {"kepsek": ["/dashboard", "/dashboard/arsip"]}}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        let menus = parsed.role_menus();
        assert!(menus.is_permitted(Role::Kepsek, "/dashboard/arsip"));
        assert!(!menus.is_permitted(Role::Kepsek, "/dashboard/laporan"));
        assert_eq!(menus.routes(Role::Admin).len(), 13);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path();
        let config = AppConfig {
            api_base_url: Some("https://ppdb.smanusantara.sch.id/api".to_string()),
            notification_secs: Some(8),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_base_url(), "https://ppdb.smanusantara.sch.id/api");
        assert_eq!(loaded.notification_delay(), Duration::from_secs(8));
        assert!(loaded.validation.is_none());
    }

    #[test]
    fn test_template_matches_defaults() {
        let template = AppConfig::template();
        let defaults = AppConfig::default();
        assert_eq!(template.api_base_url(), defaults.api_base_url());
        assert_eq!(template.notification_delay(), defaults.notification_delay());
        assert_eq!(template.validation_policy(), defaults.validation_policy());
        assert!(template.accounts.is_none());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let loaded = AppConfig::load_from(&temp_path()).unwrap();
        assert!(loaded.api_base_url.is_none());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = AppConfig::config_path();
    }
}
