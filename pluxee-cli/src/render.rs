use anyhow::{Context, Result};
use pluxee_ingest::Statement;

/// Plain text listing: one line per transaction, then a summary.
pub fn render_text(st: &Statement) -> String {
    let mut out = String::new();

    for line in &st.lines {
        let trntype = line.trntype.map(|t| t.as_str()).unwrap_or("-");
        out.push_str(&format!(
            "{}  {:<3}  {:>10}  {}\n",
            line.date.format("%Y-%m-%d"),
            trntype,
            line.amount.to_string(),
            line.memo
        ));
    }

    match st.date_range() {
        Some((from, to)) => out.push_str(&format!(
            "\n{} transactions ({} to {}), total {} {}\n",
            st.len(),
            from,
            to,
            st.total(),
            st.currency
        )),
        None => out.push_str(&format!("No transactions ({})\n", st.currency)),
    }

    out
}

pub fn render_json(st: &Statement) -> Result<String> {
    serde_json::to_string_pretty(st).context("serialize statement")
}
