use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction type codes understood by downstream OFX-style exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Point-of-sale expense
    #[serde(rename = "POS")]
    Pos,
    /// Deposit
    #[serde(rename = "DEP")]
    Dep,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Pos => "POS",
            TransactionType::Dep => "DEP",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized row of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub date: NaiveDate,
    /// Plain-ASCII description
    pub memo: String,
    /// Negative means money spent, positive means money received.
    pub amount: Decimal,
    /// `None` when no keyword rule matched the memo
    pub trntype: Option<TransactionType>,
}

/// Parsed output for one export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub currency: String,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            lines: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Net sum of all amounts
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Earliest and latest transaction date, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.lines.iter().map(|l| l.date).min()?;
        let max = self.lines.iter().map(|l| l.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(date: (i32, u32, u32), amount: Decimal) -> StatementLine {
        StatementLine {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            memo: "x".to_string(),
            amount,
            trntype: None,
        }
    }

    #[test]
    fn test_empty_statement() {
        let st = Statement::new("euro");
        assert!(st.is_empty());
        assert_eq!(st.total(), Decimal::ZERO);
        assert_eq!(st.date_range(), None);
    }

    #[test]
    fn test_total_and_range() {
        let mut st = Statement::new("euro");
        st.lines.push(line((2024, 3, 25), Decimal::new(-1550, 2)));
        st.lines.push(line((2024, 1, 2), Decimal::new(20000, 2)));
        assert_eq!(st.len(), 2);
        assert_eq!(st.total(), Decimal::new(18450, 2));
        assert_eq!(
            st.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
            ))
        );
    }

    #[test]
    fn test_trntype_serializes_as_code() {
        let mut l = line((2024, 1, 2), Decimal::new(500, 2));
        l.trntype = Some(TransactionType::Dep);
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["trntype"], "DEP");
        assert_eq!(json["amount"], "5.00");
        assert_eq!(json["date"], "2024-01-02");

        l.trntype = None;
        let json = serde_json::to_value(&l).unwrap();
        assert!(json["trntype"].is_null());
    }
}
