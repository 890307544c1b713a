use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_EXPORT_DIR: &str = "./Export";
pub const DEFAULT_PATTERN: &str = "japanese_stocks_data_*.csv";
/// Stock code column ("銘柄コード") used as the dedup key.
pub const DEFAULT_KEY_COLUMN: &str = "銘柄コード";

pub const DEFAULT_SPLIT_INPUT: &str = "stocks.json";
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_SPLIT_PREFIX: &str = "stocks";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombineOptions {
    pub export_dir: PathBuf,
    pub output_dir: PathBuf,
    /// YYYYMMDD; today's local date when None.
    pub date: Option<String>,
    /// Keep only the N most recent files. None or 0 means all.
    pub max_files: Option<usize>,
    pub pattern: String,
    pub key_column: String,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            output_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            date: None,
            max_files: None,
            pattern: DEFAULT_PATTERN.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitOptions {
    pub input: PathBuf,
    pub chunk_size: usize,
    pub output_dir: PathBuf,
    pub prefix: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SPLIT_INPUT),
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_SPLIT_PREFIX.to_string(),
        }
    }
}
