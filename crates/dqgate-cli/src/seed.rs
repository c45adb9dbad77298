//! # Seed Subcommand
//!
//! Writes the canonical sample order export used for demos and pipeline
//! smoke tests: four rows, three valid and one with a negative quantity,
//! so a `dqgate check` over it exercises the failure path end to end.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

/// File name of the generated sample export.
pub const SAMPLE_FILE_NAME: &str = "amazon_orders.csv";

/// Sample CSV content: header plus four order rows. Row TXN-103 carries
/// `qty = -1` and must fail validation; the `date` column is outside the
/// schema and ignored by the check.
pub const SAMPLE_CSV: &str = "\
order_id,qty,amount,currency,ship_country,date
TXN-101,2,150.5,INR,IN,05-01-22
TXN-102,5,200.0,INR,IN,05-02-22
TXN-103,-1,50.0,INR,IN,05-03-22
TXN-104,10,300.0,INR,IN,05-04-22
";

/// Arguments for the `dqgate seed` subcommand.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Directory the sample file is written into.
    #[arg(long, short, default_value = "data")]
    pub output: PathBuf,
}

/// Execute the seed subcommand.
pub fn run_seed(args: &SeedArgs) -> Result<u8> {
    let path = write_sample(&args.output)?;
    println!("Sample data created: {}", path.display());
    Ok(0)
}

/// Write the sample export into `dir`, creating it if needed.
pub fn write_sample(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    let path = dir.join(SAMPLE_FILE_NAME);
    fs::write(&path, SAMPLE_CSV)
        .with_context(|| format!("cannot write sample data to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_sample_file_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("data");
        let path = write_sample(&out).unwrap();
        assert_eq!(path, out.join(SAMPLE_FILE_NAME));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("order_id,qty,amount,currency,ship_country,date\n"));
        assert_eq!(content.lines().count(), 5);
    }

    #[test]
    fn sample_contains_exactly_one_bad_row() {
        let bad_rows = SAMPLE_CSV
            .lines()
            .skip(1)
            .filter(|line| line.contains(",-"))
            .count();
        assert_eq!(bad_rows, 1);
        assert!(SAMPLE_CSV.contains("TXN-103,-1"));
    }

    #[test]
    fn run_seed_reports_the_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let args = SeedArgs {
            output: dir.path().join("data"),
        };
        assert_eq!(run_seed(&args).unwrap(), 0);
        assert!(dir.path().join("data").join(SAMPLE_FILE_NAME).exists());
    }
}
