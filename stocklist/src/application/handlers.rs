use stocklist_core::error::Result;
use stocklist_core::{CombineOptions, FsCatalog, SplitOptions, combine_latest, split_stocks};

const RULE: &str = "============================================================";

pub fn handle_combine(opts: CombineOptions) -> Result<()> {
    tracing::info!("{RULE}");
    tracing::info!("latest CSV combiner: start");
    tracing::info!("{RULE}");

    match combine_latest(&FsCatalog, &opts) {
        Ok(report) => {
            tracing::info!("{RULE}");
            tracing::info!("CSV combine finished");
            tracing::info!("{RULE}");
            println!("OUTPUT_FILE={}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{RULE}");
            tracing::error!("CSV combine failed");
            tracing::error!("{RULE}");
            Err(e)
        }
    }
}

pub fn handle_split(opts: SplitOptions) -> Result<()> {
    tracing::info!("{RULE}");
    tracing::info!("stocks JSON splitter: {}", opts.input.display());
    tracing::info!("{RULE}");

    let report = split_stocks(&opts)?;
    tracing::info!(
        "split {} records into {} files",
        report.total_records,
        report.chunks.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stocklist_core::error::StockListError;
    use tempfile::TempDir;

    #[test]
    fn combine_writes_dated_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("japanese_stocks_data_x.csv"),
            "銘柄コード,銘柄名\n7203,トヨタ自動車\n",
        )
        .unwrap();
        let opts = CombineOptions {
            export_dir: tmp.path().to_path_buf(),
            output_dir: tmp.path().join("out"),
            date: Some("20250101".into()),
            ..Default::default()
        };
        handle_combine(opts).unwrap();
        assert!(tmp.path().join("out").join("20250101_combined.csv").exists());
    }

    #[test]
    fn combine_with_no_exports_fails() {
        let tmp = TempDir::new().unwrap();
        let opts = CombineOptions {
            export_dir: tmp.path().to_path_buf(),
            output_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(handle_combine(opts), Err(StockListError::NotFound(_))));
    }

    #[test]
    fn split_writes_chunks() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("stocks.json");
        fs::write(&input, r#"[{"c":"1"},{"c":"2"},{"c":"3"}]"#).unwrap();
        let opts = SplitOptions {
            input,
            chunk_size: 2,
            output_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        handle_split(opts).unwrap();
        assert!(tmp.path().join("stocks_1.json").exists());
        assert!(tmp.path().join("stocks_2.json").exists());
        assert!(!tmp.path().join("stocks_3.json").exists());
    }
}
