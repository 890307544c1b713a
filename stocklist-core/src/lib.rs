#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod options;

pub mod util {
    pub mod atomic;
    pub mod date;
}

pub mod catalog;
pub mod catalog_fs;

pub mod combine;
pub mod split;

// Re-exports: stable API surface
pub use catalog::{FileCatalog, StaticCatalog};
pub use catalog_fs::FsCatalog;
pub use combine::{CombineReport, combine_files, combine_latest};
pub use options::{CombineOptions, SplitOptions};
pub use split::{SplitReport, split_stocks};
