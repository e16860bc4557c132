//! Cell cleaning: numeric extraction and service canonicalization

use crate::error::{ExtractError, Result};
use crate::schema::MatchedTable;
use crate::types::CanonicalRateRecord;
use crate::vocabulary::ServiceTaxonomy;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

/// First integer or decimal in `text`, ignoring whitespace other than newlines.
///
/// `"40 000 руб/контейнер"` reads as `40000.0`.
#[must_use]
pub fn extract_first_number(text: &str) -> Option<f64> {
    let compact: String = text
        .chars()
        .filter(|c| *c == '\n' || !c.is_whitespace())
        .collect();

    NUMBER_REGEX
        .find(&compact)
        .and_then(|m| m.as_str().parse().ok())
}

/// Number in an entry cell; for formulas like `"100+50=150"` only the text
/// from the last `=` on counts.
#[must_use]
pub fn extract_entry_number(text: &str) -> Option<f64> {
    let result = text.rfind('=').map_or(text, |idx| &text[idx..]);
    extract_first_number(result)
}

/// Normalize every row of a matched table.
///
/// Rows without a recognizable service or without a numeric rate are dropped.
/// The table fails only when it had rows with a known service and none of them
/// carries a rate; the error names the first such row.
pub fn normalize_table(
    table: &MatchedTable,
    services: &ServiceTaxonomy,
) -> Result<Vec<CanonicalRateRecord>> {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut first_missing = None;

    for (idx, row) in table.rows.iter().enumerate() {
        let Some(service) = services.canonicalize(&row.service) else {
            debug!("Dropping row {idx}: unknown service {:?}", row.service);
            continue;
        };

        let Some(rate) = extract_first_number(&row.rate) else {
            debug!("Dropping row {idx}: no numeric rate in {:?}", row.rate);
            first_missing.get_or_insert((idx, &row.rate));
            continue;
        };

        records.push(CanonicalRateRecord {
            service: service.to_string(),
            entry: extract_entry_number(&row.entry),
            rate,
        });
    }

    match first_missing {
        Some((row, value)) if records.is_empty() => Err(ExtractError::MissingRate {
            row,
            value: value.clone(),
        }),
        _ => Ok(records),
    }
}
