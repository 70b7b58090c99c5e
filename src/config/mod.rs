use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::client::DEFAULT_BASE_URL;
use crate::api::{HootsuiteError, Result};
use crate::oauth::Token;

/// Credentials and options stored in `~/.hootsuite/settings.json`.
///
/// The file may contain `//` and `/* */` comments.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub base_url: String,
    pub redirect_uri: Option<String>,
    pub application: Option<String>,
    pub user_email: Option<String>,
    pub timeout_secs: Option<u64>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            redirect_uri: None,
            application: None,
            user_email: None,
            timeout_secs: None,
            access_token: None,
            refresh_token: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Reads settings from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path)?;
        let stripped = json_comments::StripComments::new(content.as_bytes());
        serde_json::from_reader(stripped).map_err(|e| {
            HootsuiteError::config(format!("invalid settings file {}: {e}", path.display()))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Records a freshly issued token. A missing refresh token keeps the old one.
    pub fn apply_token(&mut self, token: &Token) {
        self.access_token = Some(token.access_token.clone());
        if let Some(refresh) = &token.refresh_token {
            self.refresh_token = Some(refresh.clone());
        }
    }

    pub fn settings_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| HootsuiteError::config("HOME directory not found"))?;
        Ok(home.join(".hootsuite").join("settings.json"))
    }
}
