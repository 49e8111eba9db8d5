use crate::error::{Result, TdkError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sozluk.gov.tr";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_PLAYER: &str = "mpv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    pub download_dir: PathBuf,
    pub filename_prefix: String,
    pub player: String,
    pub player_args: Vec<String>,
}

fn default_player_args() -> Vec<String> {
    [
        "--idle=no",
        "--no-terminal",
        "--force-window=no",
        "--audio-display=no",
        "--keep-open=no",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            download_dir: PathBuf::from("."),
            filename_prefix: String::new(),
            player: DEFAULT_PLAYER.to_string(),
            player_args: default_player_args(),
        }
    }
}

impl Config {
    /// Load configuration with priority: local `.tdk.toml` > global config > defaults.
    /// Command line overrides are applied by the caller on the returned value.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("loading global config {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(".tdk.toml");
        if local_path.exists() {
            log::debug!("loading local config {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TdkError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| TdkError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Values in `other` override ours when they differ from the defaults.
    fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();
        if other.base_url != defaults.base_url {
            self.base_url = other.base_url;
        }
        if other.user_agent != defaults.user_agent {
            self.user_agent = other.user_agent;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.download_dir != defaults.download_dir {
            self.download_dir = other.download_dir;
        }
        if other.filename_prefix != defaults.filename_prefix {
            self.filename_prefix = other.filename_prefix;
        }
        if other.player != defaults.player {
            self.player = other.player;
        }
        if other.player_args != defaults.player_args {
            self.player_args = other.player_args;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tdk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
