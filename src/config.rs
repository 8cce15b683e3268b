use std::{net::SocketAddr, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub bind: SocketAddr,
    /// The html page served on `/`. It's read on every request so it can be
    /// edited without restarting.
    pub index_path: PathBuf,
    pub trends: TrendsConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrendsConfig {
    pub language: String,
    pub default_region: String,
    pub request_timeout_secs: u64,
    pub region: RegionConfig,
    pub overview: OverviewConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RegionConfig {
    /// Offset from UTC in minutes.
    pub timezone: i32,
    pub limit: usize,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OverviewConfig {
    pub timezone: i32,
    pub limit: usize,
    /// How long to wait between countries so google doesn't rate limit us.
    pub pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            index_path: PathBuf::from("index.html"),
            trends: TrendsConfig::default(),
        }
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            default_region: "KE".to_string(),
            request_timeout_secs: 10,
            region: RegionConfig::default(),
            overview: OverviewConfig::default(),
        }
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        // kenya is utc+3
        Self {
            timezone: 180,
            limit: 10,
        }
    }
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            timezone: 360,
            limit: 15,
            pause_ms: 1000,
        }
    }
}

impl TrendsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl OverviewConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Config {
    pub fn read_or_default(config_path: &std::path::Path) -> eyre::Result<Self> {
        if !config_path.exists() {
            info!(
                "No config found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        let given_config = std::fs::read_to_string(config_path)?;
        Self::from_toml(&given_config)
    }

    pub fn from_toml(s: &str) -> eyre::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
