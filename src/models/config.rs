use bw_dither::Algorithm;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "DITHERVIEW_CONFIG";

/// Configuration file used when neither `--config` nor the env var is set.
pub const DEFAULT_CONFIG_FILE: &str = "ditherview.yaml";

/// Application configuration loaded from ditherview.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Algorithm used when `--algorithm` is not given
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,

    /// Directory for rendered output when no explicit path is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Named stock images
    #[serde(default = "default_images")]
    pub images: BTreeMap<String, ImageConfig>,
}

fn default_algorithm() -> String {
    Algorithm::default().label().to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_images() -> BTreeMap<String, ImageConfig> {
    let mut images = BTreeMap::new();
    images.insert(
        "cat_fullcolor".to_string(),
        ImageConfig {
            path: PathBuf::from("images/cat_fullcolor.png"),
            label: "Cat".to_string(),
        },
    );
    images.insert(
        "spacemd".to_string(),
        ImageConfig {
            path: PathBuf::from("images/spacemd.png"),
            label: "Carina nebula".to_string(),
        },
    );
    images
}

/// A named input image
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// PNG file. Relative paths in a loaded config file are taken relative
    /// to that file's directory.
    pub path: PathBuf,

    /// Display label
    #[serde(default)]
    pub label: String,
}

impl AppConfig {
    /// Resolve the configuration file: explicit path, then env var, then
    /// the default file name.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing or unparsable file is never fatal: the problem is logged
    /// and the defaults are used. Relative image paths are rebased onto the
    /// directory holding `path`.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    let config = config.relative_to(path.parent().unwrap_or(Path::new("")));
                    tracing::info!(
                        path = %path.display(),
                        images = config.images.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Join every relative image path onto `base`.
    fn relative_to(mut self, base: &Path) -> Self {
        for image in self.images.values_mut() {
            if image.path.is_relative() {
                image.path = base.join(&image.path);
            }
        }
        self
    }

    /// Configured default algorithm.
    pub fn default_algorithm(&self) -> Result<Algorithm, RenderError> {
        Ok(self.default_algorithm.parse()?)
    }

    /// `explicit` if given, otherwise the configured default.
    ///
    /// An unrecognized `default_algorithm` is only an error when it would
    /// actually be used.
    pub fn algorithm_or_default(
        &self,
        explicit: Option<Algorithm>,
    ) -> Result<Algorithm, RenderError> {
        match explicit {
            Some(algorithm) => Ok(algorithm),
            None => self.default_algorithm(),
        }
    }

    /// Look up a stock image by name
    pub fn resolve_image(&self, name: &str) -> Result<&ImageConfig, RenderError> {
        self.images
            .get(name)
            .ok_or_else(|| RenderError::UnknownImage(name.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            output_dir: default_output_dir(),
            images: default_images(),
        }
    }
}
