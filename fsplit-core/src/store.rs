// fsplit_core/src/store.rs
use crate::error::Result;

/// Named byte blobs. Fragment order and grouping live entirely in the names,
/// so `exists`/`read`/`write` is all the splitter and joiner need.
pub trait FragmentStore: Send + Sync {
    fn exists(&self, name: &str) -> Result<bool>;

    /// Fails with `SourceNotFound` when `name` is absent.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Creates or truncates `name`.
    fn write(&self, name: &str, data: &[u8]) -> Result<()>;
}
