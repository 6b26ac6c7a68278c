use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::constants::DEFAULT_CONFIG_PATH;
use crate::ctx;
use crate::fibonacci::NegativePolicy;
use crate::file_system::FileOperations;

/// The structure for configuring `dynfib`, read from a `dynfib.toml` file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How an index below zero is treated.
    #[serde(default)]
    pub negative_input: NegativePolicy,
}

impl Config {
    /// Load the configuration from a file.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Config> {
        fs.try_read_toml(path).with_context(ctx!(
            "Could not load the configuration {:?}", path;
            "The only supported key is `negative_input = \"reject\" | \"pass-through\"`",
        ))
    }

    /// Load the configuration at `path` if one was given.
    ///
    /// Otherwise [DEFAULT_CONFIG_PATH] is tried, falling back to
    /// [Config::default] when nothing is there.
    pub fn load<F: FileOperations>(path: Option<&Path>, fs: &F) -> Result<Config> {
        match path {
            Some(path) => {
                debug!("Reading the config: {path:?}");
                Config::from_file(path, fs)
            }

            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);

                if fs.exists(default_path) {
                    debug!("Reading the config: {default_path:?}");
                    Config::from_file(default_path, fs)
                } else {
                    debug!("No config at {default_path:?}, using the defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
