use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::trace;
use serde::de::DeserializeOwned;

use crate::ctx;

/// Interactor with the actual physical file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystemInteractor;

/// This defines all interactions of dynfib with the filesystem.
pub trait FileOperations {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file into raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a file into a utf8 string.
    fn read_utf8(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?).with_context(ctx!(
            "{:?} is not valid UTF-8", path;
            "The file doesn't seem to be human readable?",
        ))
    }

    /// Try to deserialize a toml file into a struture `T`.
    fn try_read_toml<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        toml::from_str::<T>(&self.read_utf8(path)?).with_context(ctx!(
            "Could not deserialize toml file {:?}", path;
            "Ensure that the file is valid toml",
        ))
    }
}

impl FileOperations for FileSystemInteractor {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        trace!("Reading {path:?}");

        fs::read(path).with_context(ctx!(
            "Could not read the file {:?}", path;
            "Ensure that the file exists and you have permissions to access it",
        ))
    }
}

#[cfg(test)]
#[path = "tests/file_system.rs"]
mod tests;
