use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the notes API; requests go to `{base_url}/notes`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg.normalized())
    }

    /// Resolves the effective config: file (if any), then `--url` override.
    pub fn resolve(path: Option<&Path>, url_override: Option<String>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if let Some(url) = url_override {
            cfg.base_url = url;
        }
        Ok(cfg.normalized())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
        self
    }
}
