//! Remembers the last signed-in email between runs

use crate::config::AppConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    email: Option<String>,
}

/// Small JSON file in the data directory holding the last login email
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform data directory, if one can be determined
    pub fn default_location() -> Option<Self> {
        AppConfig::project_dirs().map(|dirs| Self::new(dirs.data_dir().join("session.json")))
    }

    pub fn last_email(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let stored: StoredSession = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(stored.email)
    }

    pub fn remember(&self, email: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            email: Some(email.to_string()),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Drop the remembered login, used on logout
    pub fn forget(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("removing {}", self.path.display()))?;
        }
        Ok(())
    }
}
