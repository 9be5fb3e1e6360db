mod anonymizer;
mod cli;
mod config;
mod error;
mod output;
mod pseudonym;
mod reader;
mod table;
mod types;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::AnonymizationConfig;
use types::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AnonymizationConfig::from_file(&cli.config)?;
    let table = reader::read_table(&cli.input_file)?;

    let (transformed, mappings) = anonymizer::run(table, &config, cli.hash, cli.length)?;

    // Mapping files land next to the transformed output
    let output_dir = cli.output.parent().unwrap_or_else(|| Path::new(""));
    for col_mapping in &mappings {
        if col_mapping.mapping.is_empty() {
            eprintln!(
                "Warning: column '{}' has no non-missing values",
                col_mapping.column
            );
        }
        let map_path = output::mapping_file_path(&col_mapping.column, output_dir);
        output::write_mapping(col_mapping, &map_path)?;
        eprintln!(
            "Saved mapping file: {} ({} entries)",
            map_path.display(),
            col_mapping.mapping.len()
        );
    }

    output::write_table(&transformed, &cli.output)?;
    eprintln!("Saved transformed file: {}", cli.output.display());

    Ok(())
}
