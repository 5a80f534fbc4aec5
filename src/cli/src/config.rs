use color_eyre::eyre::{Result, WrapErr};
use log::{debug, info};
use rubik_core::Face;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings read from `config.toml`. Every key is optional and command line
/// flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The face the solver treats as the bottom.
    pub base: Face,
    pub scramble_steps: usize,
    /// Fixed seed for scrambles. Random when absent.
    pub seed: Option<u64>,
    /// Print colored blocks rather than color initials.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base: Face::Down,
            scramble_steps: 25,
            seed: None,
            color: true,
        }
    }
}

impl Config {
    /// Reads `path` if given, otherwise the user's default configuration file
    /// if one exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rubik").join("config.toml"))
}
