//! City → dataset location lookup, built once from the configuration.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::expand_tilde;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    sources: BTreeMap<City, PathBuf>,
}

impl DatasetRegistry {
    /// Default file names resolved inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        let sources = City::ALL
            .into_iter()
            .map(|c| (c, dir.join(c.file_name())))
            .collect();
        Self { sources }
    }

    /// Registry for the configured data directory, with per-city overrides.
    /// Relative override paths are taken from `data_dir`.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let dir = expand_tilde(&cfg.data_dir);
        let mut registry = Self::new(&dir);

        for (name, file) in &cfg.datasets {
            let city = City::from_input(name).ok_or_else(|| AppError::UnknownCity(name.clone()))?;
            let path = expand_tilde(file);
            let path = if path.is_absolute() {
                path
            } else {
                dir.join(path)
            };
            registry.sources.insert(city, path);
        }

        for (city, path) in &registry.sources {
            debug!(city = city.key(), path = %path.display(), "dataset registered");
        }

        Ok(registry)
    }

    pub fn source(&self, city: City) -> &Path {
        // every City is inserted by `new`
        self.sources
            .get(&city)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(city.file_name()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (City, &Path)> {
        self.sources.iter().map(|(c, p)| (*c, p.as_path()))
    }
}
