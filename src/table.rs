/// Missing value tokens
pub const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "NULL", "null", "NaN", "nan", ".", "None", "none",
];

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Number(f64),
    Text(String),
}

impl Value {
    /// Parse a raw CSV field into a cell value
    pub fn from_field(field: &str) -> Self {
        if is_missing(field) {
            return Value::Missing;
        }
        if let Some(num) = parse_numeric(field) {
            return Value::Number(num);
        }
        Value::Text(field.to_string())
    }

    /// Canonical string form of the cell, or `None` for a missing cell.
    ///
    /// The same function is used when building mappings and when substituting,
    /// so a lookup key always matches the key it was built from.
    pub fn canonical(&self) -> Option<String> {
        match self {
            Value::Missing => None,
            Value::Number(n) => Some(n.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// Serialized form for CSV output; a missing cell becomes an empty field
    pub fn to_field(&self) -> String {
        self.canonical().unwrap_or_default()
    }
}

/// Check if a raw field denotes a missing value
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    MISSING_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

/// Parse a field as a number
pub fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// An in-memory table: ordered header plus row-major cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("NA"));
        assert!(is_missing("n/a"));
        assert!(is_missing("null"));
        assert!(is_missing("NaN"));
        assert!(is_missing("."));
        assert!(is_missing("  NA  "));
        assert!(!is_missing("0"));
        assert!(!is_missing("Alice"));
    }

    #[test]
    fn test_from_field() {
        assert_eq!(Value::from_field(""), Value::Missing);
        assert_eq!(Value::from_field("NA"), Value::Missing);
        assert_eq!(Value::from_field("42"), Value::Number(42.0));
        assert_eq!(Value::from_field("1.5"), Value::Number(1.5));
        assert_eq!(Value::from_field("A1"), Value::Text("A1".to_string()));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(Value::Missing.canonical(), None);
        assert_eq!(Value::Number(42.0).canonical(), Some("42".to_string()));
        assert_eq!(Value::Number(1.5).canonical(), Some("1.5".to_string()));
        assert_eq!(
            Value::Text("A1".to_string()).canonical(),
            Some("A1".to_string())
        );
    }

    #[test]
    fn test_numeric_text_same_canonical_form() {
        // "1" parsed as a number and the literal text "1" canonicalize alike,
        // so they share a mapping entry downstream
        assert_eq!(
            Value::Number(1.0).canonical(),
            Value::Text("1".to_string()).canonical()
        );
    }

    #[test]
    fn test_column_index() {
        let table = Table::new(vec!["id".to_string(), "age".to_string()]);
        assert_eq!(table.column_index("id"), Some(0));
        assert_eq!(table.column_index("age"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert!(table.has_column("id"));
        assert!(!table.has_column("missing"));
    }
}
