//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default site every episode page URL is built against.
pub const DEFAULT_BASE_URL: &str = "https://gogoanime.tel";

/// Default CSS selector locating download-mirror anchors on an episode page.
pub const DEFAULT_LINK_SELECTOR: &str = "div.cf-download a[href]";

/// Main configuration structure. Immutable once validated at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// What to download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Anime name as it appears in the episode page URL slug.
    #[serde(default)]
    pub name: String,

    /// First episode of the range (inclusive).
    #[serde(default = "default_start_episode")]
    pub start_episode: i64,

    /// Last episode of the range (inclusive). Zero means "not set".
    #[serde(default)]
    pub end_episode: i64,

    /// Substring matched against mirror link text, e.g. "1280" or "720".
    #[serde(default = "default_resolution")]
    pub resolution: String,
}

/// Session credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opaque cookie string sent verbatim on every page request.
    #[serde(default)]
    pub auth_cookie: String,
}

/// Crawl and output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads. Defaults to `<home>/Downloads/<name>`.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Site base URL for episode pages.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// CSS selector for download-mirror anchors.
    #[serde(default = "default_link_selector")]
    pub link_selector: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_episode: default_start_episode(),
            end_episode: 0,
            resolution: default_resolution(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            base_url: default_base_url(),
            link_selector: default_link_selector(),
        }
    }
}

fn default_start_episode() -> i64 {
    1
}

fn default_resolution() -> String {
    "1280".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_link_selector() -> String {
    DEFAULT_LINK_SELECTOR.to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build a config from the required fields, defaults everywhere else.
    pub fn from_required(name: &str, start_episode: i64, end_episode: i64) -> Self {
        Self {
            target: TargetConfig {
                name: name.to_string(),
                start_episode,
                end_episode,
                resolution: default_resolution(),
            },
            ..Self::default()
        }
    }

    /// Resolve the download directory: the configured override, or
    /// `<home>/Downloads/<name>`.
    pub fn download_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.options.download_directory {
            return Ok(dir.clone());
        }

        let user_dirs = UserDirs::new()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(user_dirs
            .home_dir()
            .join("Downloads")
            .join(&self.target.name))
    }

    /// Episode page URL for episode `episode` of the configured target.
    pub fn episode_page_url(&self, episode: i64) -> String {
        format!(
            "{}/{}-episode-{}",
            self.options.base_url.trim_end_matches('/'),
            self.target.name,
            episode
        )
    }
}
