//! Selection storage adapters.

/// TOML-file backed storage.
pub mod selection_storage;

pub use selection_storage::FileSelectionStorage;
