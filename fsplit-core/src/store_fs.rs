use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsplitError, Result};
use crate::store::FragmentStore;

/// Fragments as plain files under `root`. Absolute names bypass the root.
pub struct FsFragmentStore {
    root: PathBuf,
}

impl FsFragmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FragmentStore for FsFragmentStore {
    fn exists(&self, name: &str) -> Result<bool> {
        match fs::metadata(self.path_of(name)) {
            Ok(md) => Ok(md.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.path_of(name)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FsplitError::SourceNotFound(name.to_string()),
            _ => e.into(),
        })?;
        debug!("read {} ({} bytes)", name, data.len());
        Ok(data)
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        fs::write(self.path_of(name), data)?;
        debug!("wrote {} ({} bytes)", name, data.len());
        Ok(())
    }
}
