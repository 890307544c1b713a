use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stocklist_core::options::{
    DEFAULT_CHUNK_SIZE, DEFAULT_EXPORT_DIR, DEFAULT_KEY_COLUMN, DEFAULT_PATTERN,
    DEFAULT_SPLIT_INPUT, DEFAULT_SPLIT_PREFIX,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "stocklist: stock listing data tools", long_about = None)]
pub struct Cli {
    /// Also append log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Combine the most recent CSV exports into <date>_combined.csv
    Combine {
        /// directory holding the CSV exports
        #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
        export_dir: PathBuf,

        /// directory for the combined file
        #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
        output_dir: PathBuf,

        /// date for the output name (YYYYMMDD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// combine at most this many of the newest files (0 = all)
        #[arg(long)]
        max_files: Option<usize>,

        /// file name glob for export files
        #[arg(long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// column whose values identify a stock for dedup
        #[arg(long, default_value = DEFAULT_KEY_COLUMN)]
        key_column: String,
    },

    /// Split a JSON array of stocks into fixed-size files
    Split {
        /// JSON array to split
        #[arg(long, default_value = DEFAULT_SPLIT_INPUT)]
        input: PathBuf,

        /// records per output file
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE as u64,
              value_parser = clap::value_parser!(u64).range(1..))]
        chunk_size: u64,

        /// directory for the chunk files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// chunk files are named <prefix>_<n>.json
        #[arg(long, default_value = DEFAULT_SPLIT_PREFIX)]
        prefix: String,
    },
}
