//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name of the configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    pub url: String,
    pub root: String,

    // Output
    pub public_dir: String,
    pub stylesheet: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Foodgram".to_string(),

            url: "http://localhost".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            stylesheet: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a base directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(&path)
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }
}
