// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MODULE_NAME, DEFAULT_PRODUCT};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading a compose configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Configuration for composing the bindings module.
///
/// Controls the import-time knobs that are decided per deployment rather
/// than per build: the module name the host runtime sees, the product name
/// in the initialization banner, the signal-handler default that host-side
/// overrides narrow, and which optional units join the roster.
/// Usually read from a YAML file next to the deployment.
///
/// # Example
/// ```yaml
/// module_name: lume
/// product: "Lume script bindings"
/// install_signal_handler: true
/// units:
///   ros: true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub module_name: String,
    pub product: String,
    /// Signal-handler policy before host overrides apply.
    pub install_signal_handler: bool,
    pub units: UnitToggles,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
            install_signal_handler: true,
            units: UnitToggles::default(),
        }
    }
}

/// Opt-in switches for units excluded from the default roster.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UnitToggles {
    pub ros: bool,
}

impl Default for UnitToggles {
    fn default() -> Self {
        Self { ros: false }
    }
}

/// Load a compose config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ComposeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: ComposeConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a compose config, falling back to defaults.
///
/// Import must proceed whether or not a config file is present, so a
/// missing file is routine and a malformed one is logged and ignored.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> ComposeConfig {
    match load_config(&path) {
        Ok(cfg) => cfg,
        Err(ConfigError::Io(error)) => {
            tracing::debug!(
                path = %path.as_ref().display(),
                %error,
                "No compose config file, using defaults"
            );
            ComposeConfig::default()
        }
        Err(ConfigError::Parse(error)) => {
            tracing::warn!(
                path = %path.as_ref().display(),
                %error,
                "Malformed compose config file, using defaults"
            );
            ComposeConfig::default()
        }
    }
}
