//! Optional `namegen.ron` configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use syllable_core::GenerateRequest;
use syllable_harvester::{AtomicFileWriter, FetchSettings, HarvestSettings, PageErrorPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site_url: String,
    pub store_dir: PathBuf,
    pub courtesy_delay_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Count unreachable dictionary pages as read instead of aborting.
    pub skip_failed_pages: bool,
    pub page_limit: u64,
    pub generate: GenerateDefaults,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let harvest = HarvestSettings::default();
        let fetch = FetchSettings::default();
        Self {
            site_url: harvest.site_url,
            store_dir: harvest.store_dir,
            courtesy_delay_ms: harvest.courtesy_delay.as_millis() as u64,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            skip_failed_pages: false,
            page_limit: 1000,
            generate: GenerateDefaults::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateDefaults {
    pub count: usize,
    pub min_syllables: usize,
    pub max_syllables: usize,
    pub occasional_frequency: f64,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        let request = GenerateRequest::default();
        Self {
            count: request.count,
            min_syllables: request.min_syllables,
            max_syllables: request.max_syllables,
            occasional_frequency: request.occasional_frequency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub target: LogTarget,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::Terminal,
            level: "info".to_string(),
            file: PathBuf::from("./namegen.log"),
        }
    }
}

impl LogConfig {
    pub fn destination(&self) -> LogDestination {
        match self.target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl AppConfig {
    pub fn harvest_settings(&self) -> HarvestSettings {
        HarvestSettings {
            site_url: self.site_url.clone(),
            store_dir: self.store_dir.clone(),
            courtesy_delay: Duration::from_millis(self.courtesy_delay_ms),
            page_error_policy: if self.skip_failed_pages {
                PageErrorPolicy::Skip
            } else {
                PageErrorPolicy::Abort
            },
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
        }
    }

    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            count: self.generate.count,
            min_syllables: self.generate.min_syllables,
            max_syllables: self.generate.max_syllables,
            occasional_frequency: self.generate.occasional_frequency,
        }
    }
}

/// Load the configuration at `path`. A missing file yields the defaults; an
/// unreadable or malformed one is an error.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read config {:?}", path));
        }
    };
    ron::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<PathBuf> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(config, pretty).context("Failed to serialize config")?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Config path {:?} has no file name", path))?;

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    writer
        .write(file_name, &content)
        .with_context(|| format!("Failed to write config {:?}", path))
}
