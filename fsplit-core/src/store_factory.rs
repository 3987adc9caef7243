use std::path::PathBuf;

use crate::store::FragmentStore;
use crate::store_fs::FsFragmentStore;
use crate::store_mem::MemFragmentStore;

pub enum Backend {
    Fs { root: PathBuf },
    Memory,
}

pub fn open_store(backend: Backend) -> Box<dyn FragmentStore> {
    match backend {
        Backend::Fs { root } => Box::new(FsFragmentStore::new(root)),
        Backend::Memory => Box::new(MemFragmentStore::new()),
    }
}
