//! Field normalizers: amount text to exact decimal, free text to plain ASCII.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::rules::{sign_rule, SignRule};

/// UTF-8 euro sign (E2 82 AC) read back as Windows-1252. Pluxee exports
/// routinely carry this instead of a proper `€`.
pub const MISDECODED_EURO_SUFFIX: &str = "\u{e2}\u{201a}\u{ac}";

pub const EURO_SUFFIX: &str = "€";

/// Suffixes removed from the amount column, tried in order.
pub const CURRENCY_SUFFIXES: &[&str] = &[MISDECODED_EURO_SUFFIX, EURO_SUFFIX];

static TRANSACTION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Transactie [^)]+\)").expect("transaction id pattern"));

/// Closest plain-ASCII spelling of `text`. Characters without a mapping
/// become `[?]`.
pub fn transliterate(text: &str) -> String {
    deunicode::deunicode(text)
}

/// Remove `(Transactie ...)` groups from a memo.
pub fn strip_transaction_id(memo: &str) -> String {
    TRANSACTION_ID_RE.replace_all(memo, "").trim_end().to_string()
}

fn strip_currency_suffix(amount: &str) -> &str {
    CURRENCY_SUFFIXES
        .iter()
        .find_map(|suffix| amount.strip_suffix(suffix))
        .unwrap_or(amount)
}

/// `1.234.567` style grouping: a leading group of 1-3 digits, then groups
/// of exactly 3.
fn is_digit_grouped(int_part: &str, mark: char) -> bool {
    int_part.split(mark).enumerate().all(|(i, group)| {
        let len_ok = if i == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        len_ok && group.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Turn a raw amount cell into an exact decimal.
///
/// The sign is decided by the keyword rules applied to the raw
/// `description`: expenses are always negative, everything else keeps the
/// printed sign with `+` dropped.
pub fn normalize_amount(
    raw: &str,
    description: &str,
    decimal_separator: char,
) -> std::result::Result<Decimal, rust_decimal::Error> {
    let compact: String = raw.chars().filter(|c| *c != ' ').collect();
    let trimmed = strip_currency_suffix(&compact);

    let signed = match sign_rule(description) {
        SignRule::Negative => format!("-{}", trimmed.trim_start_matches(['+', '-'])),
        SignRule::AsPrinted => trimmed.replace('+', ""),
    };

    let (negative, body) = match signed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, signed.as_str()),
    };
    let (int_part, frac_part) = match body.split_once(decimal_separator) {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let grouping = match decimal_separator {
        ',' => Some('.'),
        '.' => Some(','),
        _ => None,
    };
    let int_digits = match grouping {
        Some(mark) if int_part.contains(mark) => {
            if !is_digit_grouped(int_part, mark) {
                return Err(format!("Invalid digit grouping in amount: {raw}").into());
            }
            int_part.replace(mark, "")
        }
        _ => int_part.to_string(),
    };

    let mut canonical = String::with_capacity(body.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(&int_digits);
    if let Some(frac) = frac_part {
        canonical.push('.');
        canonical.push_str(frac);
    }

    Decimal::from_str_exact(&canonical)
}
