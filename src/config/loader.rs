// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LOG_LEVEL, DEFAULT_STRICT_UNDEFINED};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the overview renderer.
///
/// Every field is optional; an absent file behaves exactly like
/// `OverviewConfig::default()`.
///
/// # Fields
/// * `template` - Where the overview template comes from and how it treats unknown variables
/// * `log_level` - `tracing` filter directive used when `RUST_LOG` is not set
///
/// # Example
/// ```yaml
/// template:
///   path: templates/overview.html
///   strict_undefined: true
/// log_level: debug
/// ```
#[derive(Debug, Deserialize)]
pub struct OverviewConfig {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Template selection options.
///
/// # Fields
/// * `path` - Template file to load at startup; the embedded template is used when absent
/// * `strict_undefined` - Fail the render when the template references an unknown variable
#[derive(Debug, Deserialize)]
pub struct TemplateConfig {
    pub path: Option<PathBuf>,
    #[serde(default = "default_strict_undefined")]
    pub strict_undefined: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: None,
            strict_undefined: DEFAULT_STRICT_UNDEFINED,
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_strict_undefined() -> bool {
    DEFAULT_STRICT_UNDEFINED
}

/// Load a config from a YAML file
///
/// Nothing is logged here; the config usually decides how logging is set up, so the
/// caller reports `ConfigLoaded` once its subscriber is installed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<OverviewConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: OverviewConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(cfg)
}
