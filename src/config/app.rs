// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE, MAX_DEFLATE_LEVEL};
use crate::engine::Engine;
use crate::enums::{Profile, Variant};
use crate::error::CodecError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_codec")]
    pub codec: CodecSettings,
    #[serde(default = "default_output")]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodecSettings {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_deflate_level")]
    pub deflate_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    /// Print a JSON summary after encoding instead of the plain length line
    #[serde(default)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            codec: default_codec(),
            output: default_output(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, CodecError> {
        let mut conf: Config = toml::from_str(content)?;
        if conf.codec.deflate_level > MAX_DEFLATE_LEVEL {
            warn!(
                requested = conf.codec.deflate_level,
                "deflate_level above {MAX_DEFLATE_LEVEL}, clamping"
            );
            conf.codec.deflate_level = MAX_DEFLATE_LEVEL;
        }
        Ok(conf)
    }
}

impl CodecSettings {
    pub fn engine(&self) -> Engine {
        Engine::new(self.variant, self.profile).with_deflate_level(self.deflate_level)
    }
}

/// Read and parse one config file
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, CodecError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Config::from_toml_str(&content)
}

/// First existing candidate: `$HAJIMI_CONFIG`, `./hajimi.toml`, user config dir
fn locate() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("hajimi").join("config.toml"))
        .filter(|p| p.exists())
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match locate() {
        Some(path) => match load_from(&path) {
            Ok(conf) => {
                debug!(path = %path.display(), "loaded config");
                conf
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unusable config, using built-in defaults");
                Config::default()
            }
        },
        None => Config::default(),
    })
}
