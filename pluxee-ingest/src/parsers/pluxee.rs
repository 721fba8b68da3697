//! Pluxee voucher account CSV export parser
//!
//! Expected file layout (`;` delimited, `"` quoted, UTF-8):
//!   Datum;Beschrijving;Bedrag
//!   25-03-2024;Uitgave Delhaize (Transactie 8F2A1C);+15,50â‚¬
//!   02-01-2024;Storting werkgever;+200,00â‚¬
//!
//! The header line is consumed by [`open_statement`] (or by the caller) before
//! the parser sees the stream.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info};

use crate::config::{ColumnMapping, ParserConfig};
use crate::error::{ParseError, Result};
use crate::normalize::{normalize_amount, strip_transaction_id, transliterate};
use crate::rules::classify;
use crate::types::{Statement, StatementLine};

/// Raw cell values of one row, before any normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub date: &'a str,
    pub description: &'a str,
    pub amount: &'a str,
}

impl<'a> RawFields<'a> {
    pub fn extract(record: &'a StringRecord, columns: &ColumnMapping, row: usize) -> Result<Self> {
        let get = move |field: &'static str, index: usize| {
            record.get(index).ok_or_else(|| ParseError::MalformedRow {
                row,
                field,
                index,
                found: record.len(),
            })
        };

        Ok(Self {
            date: get("date", columns.date)?,
            description: get("description", columns.description)?,
            amount: get("amount", columns.amount)?,
        })
    }
}

/// Open a Pluxee export, discard its header line and return a parser over
/// the remaining rows.
pub fn open_statement(path: impl AsRef<Path>, config: ParserConfig) -> Result<PluxeeParser<BufReader<File>>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);

    let mut header = String::new();
    if reader.read_line(&mut header)? == 0 {
        return Err(ParseError::MissingHeader);
    }
    debug!(path = %path.display(), header = header.trim_end(), "skipped header line");

    Ok(PluxeeParser::with_config(reader, config))
}

#[derive(Debug)]
pub struct PluxeeParser<R> {
    reader: R,
    config: ParserConfig,
}

impl<R: Read> PluxeeParser<R> {
    /// Parser with the default Pluxee layout. `reader` must already be
    /// positioned after the header line.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParserConfig::default())
    }

    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read every remaining row into a statement. The first bad row aborts
    /// the whole parse.
    pub fn parse(self) -> Result<Statement> {
        let Self { reader, config } = self;
        let mut rdr = row_reader(reader);
        let mut statement = Statement::new(config.currency.clone());

        let mut last_row = 0;
        for result in rdr.records() {
            let record = result.map_err(|source| ParseError::Csv {
                row: source.position().map_or(last_row + 1, line_of),
                source,
            })?;
            let row = record.position().map_or(last_row + 1, line_of);
            last_row = row;
            statement.lines.push(build_line(&record, row, &config)?);
        }

        info!(
            lines = statement.len(),
            currency = %statement.currency,
            "parsed Pluxee statement"
        );
        Ok(statement)
    }
}

/// Line number within the data section (the header is not part of the stream).
fn line_of(pos: &csv::Position) -> usize {
    pos.line() as usize
}

fn row_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .double_quote(true)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

fn build_line(record: &StringRecord, row: usize, config: &ParserConfig) -> Result<StatementLine> {
    let fields = RawFields::extract(record, &config.columns, row)?;

    let date = NaiveDate::parse_from_str(fields.date, &config.date_format).map_err(|source| {
        ParseError::Date {
            row,
            value: fields.date.to_string(),
            source,
        }
    })?;

    let mut memo = transliterate(fields.description);

    // Sign comes from the raw description, type from the ASCII memo.
    let amount = normalize_amount(fields.amount, fields.description, config.decimal_separator)
        .map_err(|source| ParseError::Amount {
            row,
            value: fields.amount.to_string(),
            source,
        })?;

    if config.strip_transaction_id {
        memo = strip_transaction_id(&memo);
    }
    let trntype = classify(&memo);

    debug!(row, %date, %amount, ?trntype, "parsed row");

    Ok(StatementLine {
        date,
        memo,
        amount,
        trntype,
    })
}
