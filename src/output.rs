use std::path::{Path, PathBuf};

use csv::Writer;

use crate::anonymizer::ColumnMapping;
use crate::table::Table;
use crate::types::Result;

/// Write a table to a CSV file; missing cells become empty fields
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_field()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one column's mapping to a CSV file.
///
/// Header is `Original_<name>` / `Transformed_<name>` with spaces in the
/// column name replaced by underscores; rows are in first-occurrence order.
pub fn write_mapping(col_mapping: &ColumnMapping, path: &Path) -> Result<()> {
    let name = col_mapping.column.replace(' ', "_");
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        format!("Original_{}", name),
        format!("Transformed_{}", name),
    ])?;
    for (original, token) in col_mapping.mapping.iter() {
        writer.write_record([original, token])?;
    }
    writer.flush()?;
    Ok(())
}

/// Path of the mapping file for a column, next to the transformed output
pub fn mapping_file_path(column: &str, output_dir: &Path) -> PathBuf {
    let safe = column.to_lowercase().replace(' ', "_");
    output_dir.join(format!("{}_map.csv", safe))
}
