// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{BookclipError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Bookclip", "bookclip"));

pub const DEFAULT_BASE_URL: &str = "https://app.bkper.com/_ah/api/bkper/v2/";

pub const ENV_API_KEY: &str = "BOOKCLIP_API_KEY";
pub const ENV_OAUTH_TOKEN: &str = "BOOKCLIP_OAUTH_TOKEN";
pub const ENV_API_URL: &str = "BOOKCLIP_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub oauth_token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            oauth_token: None,
            base_url: default_base_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        BookclipError::Config("Could not determine platform-specific config dir".into())
    })?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("config.json"))
}

impl Config {
    /// Platform config file plus environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&config_path()?)?;
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let cfg = serde_json::from_str(&raw)
            .map_err(|e| BookclipError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Non-blank env values win over the file.
    pub fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(ENV_OAUTH_TOKEN) {
            self.oauth_token = Some(v);
        }
        if let Some(v) = get(ENV_API_URL) {
            self.base_url = v;
        }
    }
}

/// Shows the first and last two characters of a secret.
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 6 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config {
            api_key: Some("file-key".into()),
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [(ENV_OAUTH_TOKEN, "tok"), (ENV_API_KEY, "  ")]
            .into_iter()
            .collect();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("file-key"));
        assert_eq!(cfg.oauth_token.as_deref(), Some("tok"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn mask_hides_the_middle() {
        assert_eq!(mask("abcdefgh"), "ab****gh");
        assert_eq!(mask("abc"), "***");
    }
}
