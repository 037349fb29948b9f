use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the city CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Rows printed per raw data page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    /// Optional per-city dataset override (city name → file name or path)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub datasets: BTreeMap<String, String>,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            datasets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbikeshare")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rbikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration document. Missing keys fall back to defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?;
        cfg.page_size = cfg.page_size.max(1);
        Ok(cfg)
    }

    /// Horizontal rule printed between report blocks
    pub fn separator(&self) -> String {
        self.separator_char.repeat(self.separator_width)
    }

    /// Initialize the configuration directory and file.
    /// In test mode the file is not written.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            ..Config::default()
        };

        let path = Self::config_file();
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }
}
