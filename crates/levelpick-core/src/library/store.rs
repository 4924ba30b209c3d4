//! Filesystem access for game directories

use std::path::Path;

use crate::error::{LibraryError, Result};

/// Directory listing and file removal used by the listing and delete flow
pub trait GameStore {
    /// Names of the entries in `dir`, in no particular order
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>>;

    /// Remove the file at `path`
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// `GameStore` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl GameStore for FsStore {
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let read_err = |source| LibraryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|source| LibraryError::RemoveFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
