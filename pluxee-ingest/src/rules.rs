//! Keyword rules mapping Pluxee descriptions to a transaction type and an
//! amount sign convention.
//!
//! Rules are evaluated top to bottom and the first match wins, so an
//! expense keyword takes precedence over a deposit keyword.

use crate::types::TransactionType;

/// How the printed sign of an amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignRule {
    /// Always recorded as negative, whatever sign the export prints
    Negative,
    /// `+` is dropped, a printed `-` is kept
    AsPrinted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Case-sensitive substring of the description
    pub keyword: &'static str,
    pub trntype: TransactionType,
    pub sign: SignRule,
}

pub const EXPENSE_KEYWORD: &str = "Uitgave";
pub const DEPOSIT_KEYWORD: &str = "Storting";

pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: EXPENSE_KEYWORD,
        trntype: TransactionType::Pos,
        sign: SignRule::Negative,
    },
    KeywordRule {
        keyword: DEPOSIT_KEYWORD,
        trntype: TransactionType::Dep,
        sign: SignRule::AsPrinted,
    },
];

/// First rule whose keyword occurs in `description`.
pub fn match_rule(description: &str) -> Option<&'static KeywordRule> {
    RULES.iter().find(|r| description.contains(r.keyword))
}

/// Transaction type for a (transliterated) memo.
pub fn classify(memo: &str) -> Option<TransactionType> {
    match_rule(memo).map(|r| r.trntype)
}

/// Sign convention for a raw description; unmatched descriptions keep the
/// printed sign.
pub fn sign_rule(description: &str) -> SignRule {
    match_rule(description)
        .map(|r| r.sign)
        .unwrap_or(SignRule::AsPrinted)
}
