use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{FsplitError, Result};
use crate::store::FragmentStore;

/// In-memory store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemFragmentStore {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemFragmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(name: &str, data: &[u8]) -> Self {
        let s = Self::new();
        s.lock().insert(name.to_string(), data.to_vec());
        s
    }

    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        self.lock().remove(name)
    }

    /// Sorted names currently held.
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.blobs.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl FragmentStore for MemFragmentStore {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.lock().contains_key(name))
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| FsplitError::SourceNotFound(name.to_string()))
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        self.lock().insert(name.to_string(), data.to_vec());
        Ok(())
    }
}
