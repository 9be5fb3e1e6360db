use std::collections::HashMap;

use crate::config::AnonymizationConfig;
use crate::error::Error;
use crate::pseudonym;
use crate::table::{Table, Value};
use crate::types::{HashAlgorithm, Result};

/// Original -> pseudonym relation for one column within one run.
///
/// Entries are kept in first-occurrence order so mapping files come out in a
/// stable, reviewable order for a given input.
#[derive(Debug, Clone, Default)]
pub struct PseudonymMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, String>,
}

impl PseudonymMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair unless the original value is already mapped
    pub fn insert(&mut self, original: String, token: String) {
        if self.index.contains_key(&original) {
            return;
        }
        self.index.insert(original.clone(), token.clone());
        self.entries.push((original, token));
    }

    /// Look up the token for an original value
    pub fn get(&self, original: &str) -> Option<&str> {
        self.index.get(original).map(String::as_str)
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    /// Pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A column name together with its pseudonym mapping
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub column: String,
    pub mapping: PseudonymMapping,
}

/// Build one pseudonym mapping per target column.
///
/// The token length and every target column are validated before any hashing
/// so a doomed request produces no partial mappings. Distinct non-missing
/// values are collected in first-occurrence order and hashed once each.
pub fn build_mappings(
    table: &Table,
    ids: &[String],
    algorithm: HashAlgorithm,
    length: usize,
) -> Result<Vec<ColumnMapping>> {
    pseudonym::validate(algorithm, length)?;

    for col in ids {
        if !table.has_column(col) {
            return Err(Error::ColumnNotFound(col.clone()));
        }
    }

    let mut mappings = Vec::with_capacity(ids.len());
    for col in ids {
        let col_idx = table
            .column_index(col)
            .ok_or_else(|| Error::ColumnNotFound(col.clone()))?;

        let mut mapping = PseudonymMapping::new();
        for row in &table.rows {
            let canonical = match row.get(col_idx).and_then(Value::canonical) {
                Some(c) => c,
                None => continue,
            };
            if mapping.contains(&canonical) {
                continue;
            }
            let token = pseudonym::generate(&canonical, algorithm, length)?;
            mapping.insert(canonical, token);
        }

        mappings.push(ColumnMapping {
            column: col.clone(),
            mapping,
        });
    }

    Ok(mappings)
}

/// Replace target-column cells with their pseudonyms.
///
/// Missing cells pass through untouched; no other columns are modified.
pub fn apply_substitutions(mut table: Table, mappings: &[ColumnMapping]) -> Table {
    for col_mapping in mappings {
        let col_idx = match table.column_index(&col_mapping.column) {
            Some(idx) => idx,
            None => continue,
        };
        for row in &mut table.rows {
            let canonical = match row.get(col_idx).and_then(Value::canonical) {
                Some(c) => c,
                None => continue,
            };
            if let Some(token) = col_mapping.mapping.get(&canonical) {
                row[col_idx] = Value::Text(token.to_string());
            }
        }
    }
    table
}

/// Drop the named columns where present; unknown names are ignored
pub fn remove_columns(mut table: Table, columns_to_remove: &[String]) -> Table {
    let drop_indices: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| columns_to_remove.iter().any(|c| c == *name))
        .map(|(idx, _)| idx)
        .collect();

    if drop_indices.is_empty() {
        return table;
    }

    table.columns = table
        .columns
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !drop_indices.contains(idx))
        .map(|(_, name)| name)
        .collect();

    for row in &mut table.rows {
        *row = std::mem::take(row)
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !drop_indices.contains(idx))
            .map(|(_, cell)| cell)
            .collect();
    }

    table
}

/// Run the full pipeline: validate, build mappings, substitute, drop columns.
///
/// Returns the transformed table and the per-column mappings (in config `ids`
/// order) for the caller to persist. Stateless; any validation failure aborts
/// before a single cell is rewritten.
pub fn run(
    table: Table,
    config: &AnonymizationConfig,
    algorithm: HashAlgorithm,
    length: usize,
) -> Result<(Table, Vec<ColumnMapping>)> {
    let mappings = build_mappings(&table, &config.ids, algorithm, length)?;
    let table = apply_substitutions(table, &mappings);
    let table = remove_columns(table, &config.remove);
    Ok((table, mappings))
}
