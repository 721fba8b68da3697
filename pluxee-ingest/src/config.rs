//! Parser configuration: column layout and format conventions of a Pluxee export.

use serde::{Deserialize, Serialize};

/// Zero-based CSV column of each logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub date: usize,
    pub description: usize,
    pub amount: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: 0,
            description: 1,
            amount: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Currency tag stamped on every statement
    pub currency: String,
    /// chrono format string for the date column
    pub date_format: String,
    /// Decimal separator of the amount column; the other of `,`/`.` is treated
    /// as a digit-grouping mark.
    pub decimal_separator: char,
    /// Remove `(Transactie ...)` suffixes from memos
    pub strip_transaction_id: bool,
    pub columns: ColumnMapping,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            currency: "euro".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            decimal_separator: ',',
            strip_transaction_id: false,
            columns: ColumnMapping::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pluxee_layout() {
        let cfg = ParserConfig::default();
        assert_eq!(cfg.columns, ColumnMapping { date: 0, description: 1, amount: 2 });
        assert_eq!(cfg.currency, "euro");
        assert_eq!(cfg.date_format, "%d-%m-%Y");
        assert_eq!(cfg.decimal_separator, ',');
        assert!(!cfg.strip_transaction_id);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: ParserConfig =
            serde_json::from_str(r#"{"strip_transaction_id": true}"#).unwrap();
        assert!(cfg.strip_transaction_id);
        assert_eq!(cfg.columns, ColumnMapping::default());
        assert_eq!(cfg.currency, "euro");
    }

    #[test]
    fn test_partial_columns_fill_defaults() {
        let cfg: ParserConfig = serde_json::from_str(r#"{"columns": {"amount": 4}}"#).unwrap();
        assert_eq!(cfg.columns, ColumnMapping { date: 0, description: 1, amount: 4 });
    }
}
