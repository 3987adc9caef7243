#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod naming;

pub mod codec;

pub mod store;
pub mod store_factory;
pub mod store_fs;
pub mod store_mem;

pub mod join;
pub mod split;

#[cfg(test)]
mod proptests;

// Re-exports: stable API surface
pub use config::Config;
pub use error::{FsplitError, Result};
pub use join::{JoinOptions, discover_fragments, join};
pub use split::{SplitOptions, split};
pub use store::FragmentStore;
