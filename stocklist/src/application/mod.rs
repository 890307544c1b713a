pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use stocklist_core::error::Result;
use stocklist_core::{CombineOptions, SplitOptions};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Combine {
            export_dir,
            output_dir,
            date,
            max_files,
            pattern,
            key_column,
        } => handlers::handle_combine(CombineOptions {
            export_dir,
            output_dir,
            date,
            max_files,
            pattern,
            key_column,
        }),
        Commands::Split {
            input,
            chunk_size,
            output_dir,
            prefix,
        } => handlers::handle_split(SplitOptions {
            input,
            chunk_size: usize::try_from(chunk_size).unwrap_or(usize::MAX),
            output_dir,
            prefix,
        }),
    }
}
