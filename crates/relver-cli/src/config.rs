use anyhow::{Context, Result};
use log::debug;
use relver_semver::{LowZeros, ParsePolicy};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "relver.toml";

/// The relver configuration file structure (relver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelverConfig {
    /// Parsing defaults
    pub parse: ParseConfig,

    /// Formatting defaults
    pub format: FormatConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Default malformed fields instead of rejecting them
    pub lenient: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Drop trailing zero fields of releases (1.0.0 -> 1)
    pub hide_low_zeros: Option<bool>,
}

impl RelverConfig {
    /// Load configuration from relver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                debug!("Loading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: RelverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                debug!("No {} found", CONFIG_FILE_NAME);
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

/// Resolve the parse policy; explicit flags win over the config file
pub fn effective_policy(lenient: bool, strict: bool, config: Option<&RelverConfig>) -> ParsePolicy {
    let lenient = if lenient {
        true
    } else if strict {
        false
    } else {
        config.and_then(|c| c.parse.lenient).unwrap_or(false)
    };

    if lenient {
        ParsePolicy::Lenient
    } else {
        ParsePolicy::Strict
    }
}

/// Resolve the low-zeros policy; explicit flags win over the config file
pub fn effective_low_zeros(hide: bool, show: bool, config: Option<&RelverConfig>) -> LowZeros {
    let hide = if hide {
        true
    } else if show {
        false
    } else {
        config.and_then(|c| c.format.hide_low_zeros).unwrap_or(false)
    };

    LowZeros::from_hide_flag(hide)
}
