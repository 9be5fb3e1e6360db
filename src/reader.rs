use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;

use crate::table::{Table, Value};
use crate::types::Result;

/// Read a CSV file into an in-memory table.
///
/// The first record is the header. Fields are parsed into cells with the
/// missing-token and numeric rules from the table module. Ragged rows are a
/// CSV error (the reader is not flexible).
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(columns);
    for result in csv_reader.records() {
        let record = result?;
        let row: Vec<Value> = record.iter().map(Value::from_field).collect();
        table.rows.push(row);
    }

    Ok(table)
}
