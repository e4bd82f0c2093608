//! Optional RON configuration file. Every field falls back to its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracker_engine::{
    EngineConfig, EnrichmentMode, FetchSettings, LinkSource, JIKAN_BASE_URL, KITSU_BASE_URL,
};

use super::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILE: &str = "tracker.ron";
const DEFAULT_CURATED_LIST: &str = "anime_list.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LinkSourceSetting {
    #[default]
    ByTitle,
    ById,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum EnrichmentSetting {
    #[default]
    Concurrent,
    /// Pause in milliseconds between consecutive searches.
    Throttled(u64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub curated_list: PathBuf,
    pub kitsu_base_url: String,
    pub jikan_base_url: String,
    pub link_source: LinkSourceSetting,
    pub enrichment: EnrichmentSetting,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            curated_list: PathBuf::from(DEFAULT_CURATED_LIST),
            kitsu_base_url: KITSU_BASE_URL.to_string(),
            jikan_base_url: JIKAN_BASE_URL.to_string(),
            link_source: LinkSourceSetting::default(),
            enrichment: EnrichmentSetting::default(),
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            max_bytes: fetch.max_bytes,
            log_destination: LogDestination::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                connect_timeout: Duration::from_millis(self.connect_timeout_ms),
                request_timeout: Duration::from_millis(self.request_timeout_ms),
                max_bytes: self.max_bytes,
                ..FetchSettings::default()
            },
            kitsu_base_url: self.kitsu_base_url.clone(),
            jikan_base_url: self.jikan_base_url.clone(),
            link_source: match self.link_source {
                LinkSourceSetting::ByTitle => LinkSource::ByTitle,
                LinkSourceSetting::ById => LinkSource::ById,
            },
            enrichment: match self.enrichment {
                EnrichmentSetting::Concurrent => EnrichmentMode::Concurrent,
                EnrichmentSetting::Throttled(delay_ms) => EnrichmentMode::Throttled {
                    delay: Duration::from_millis(delay_ms),
                },
            },
        }
    }
}

/// Reads the config at `path`. A missing file yields `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
