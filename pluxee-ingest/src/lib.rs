//! pluxee-ingest: Pluxee CSV statement ingestion into normalized transactions.

pub mod config;
pub mod error;
pub mod normalize;
pub mod parsers;
pub mod rules;
pub mod types;

pub use config::{ColumnMapping, ParserConfig};
pub use error::{ParseError, Result};
pub use parsers::pluxee::{open_statement, PluxeeParser};
pub use types::{Statement, StatementLine, TransactionType};
