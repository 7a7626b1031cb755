use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Tuning of the feed: paging, simulated latency and virtualization.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Rows per page.
    pub page_size: u32,
    /// Simulated latency of each page fetch.
    pub fetch_delay_ms: u64,
    /// Rows rendered beyond each edge of the viewport.
    pub overscan: usize,
    /// Distance from the top, in lines, at which the next page is requested.
    pub load_threshold: u32,
    /// Pixel heights are mapped onto terminal lines at this ratio.
    pub px_per_line: u32,
    /// Height assumed for a row whose height is not known yet.
    pub estimate_size_px: u32,
    pub mouse_scroll_lines: u32,
    /// Stop paging after this many rows. Unbounded when absent.
    pub max_rows: Option<u32>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            fetch_delay_ms: 500,
            overscan: 5,
            load_threshold: 1,
            px_per_line: 20,
            estimate_size_px: 60,
            mouse_scroll_lines: 3,
            max_rows: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub feed: FeedSettings,
}

impl Config {
    /// The configuration shipped with the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load user configuration from the config directory on top of the
    /// embedded defaults. A missing user file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        cfg.validate()?;

        Ok(cfg)
    }

    /// Fill in keybindings and styles the user did not override.
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.page_size == 0 {
            return Err(ConfigError::Message(String::from(
                "feed.page_size must be greater than zero",
            )));
        }
        if self.feed.px_per_line == 0 {
            return Err(ConfigError::Message(String::from(
                "feed.px_per_line must be greater than zero",
            )));
        }
        Ok(())
    }
}
