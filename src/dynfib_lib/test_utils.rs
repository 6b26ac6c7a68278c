use std::path::Path;

use anyhow::bail;
use anyhow::Result;

use crate::file_system::FileOperations;
use crate::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor;

/// A filesystem on which no file exists.
pub struct EmptyFilesystem;

impl FileOperations for EmptyFilesystem {
    fn exists(&self, _: &Path) -> bool {
        false
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        bail!("File not found: {path:?}")
    }
}

/// A filesystem on which every path holds the same contents.
pub struct StaticFilesystem(pub &'static str);

impl FileOperations for StaticFilesystem {
    fn exists(&self, _: &Path) -> bool {
        true
    }

    fn read_bytes(&self, _: &Path) -> Result<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }
}
