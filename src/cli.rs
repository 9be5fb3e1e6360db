use clap::Parser;
use std::path::PathBuf;

use crate::types::{HashAlgorithm, DEFAULT_OUTPUT_FILE, DEFAULT_TOKEN_LENGTH};

/// Transform and anonymize a CSV file using a JSON config
#[derive(Parser, Debug)]
#[command(name = "csv-deid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    pub input_file: PathBuf,

    /// JSON config file path
    #[arg(long)]
    pub config: PathBuf,

    /// Output CSV file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Hash algorithm
    #[arg(long, value_enum, default_value_t = HashAlgorithm::Sha256)]
    pub hash: HashAlgorithm,

    /// Length of hash prefix
    #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub length: usize,
}
