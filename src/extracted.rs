//! Rate table extraction from an email's HTML body

use crate::error::Result;
use crate::normalize::normalize_table;
use crate::placeholder::PlaceholderMap;
use crate::schema::match_schema;
use crate::table::extract_top_level_grids;
use crate::thread::newest_message;
use crate::types::CanonicalRateRecord;
use crate::vocabulary::Vocabulary;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Normalized records of one accepted table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub records: Vec<CanonicalRateRecord>,
}

/// All rate tables found in the newest message of one email
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTableResult {
    pub tables: Vec<RateTable>,
}

impl RateTableResult {
    /// Records of every table, in document order
    pub fn records(&self) -> impl Iterator<Item = &CanonicalRateRecord> {
        self.tables.iter().flat_map(|t| t.records.iter())
    }

    /// Check if no record was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.records.is_empty())
    }

    /// Get count of all extracted records
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.tables.iter().map(|t| t.records.len()).sum()
    }
}

/// Extract canonical rate tables from the newest message of an HTML email.
///
/// Tables are swapped for placeholders before the thread is split so that no
/// quote boundary can cut through one; only the newest message is restored and
/// inspected. If an accepted table has rows with known services but none of
/// them carries a rate, the error is returned and no table of this email is kept.
pub fn extract_rate_tables(html: &str, vocabulary: &Vocabulary) -> Result<RateTableResult> {
    let document = Html::parse_document(html);
    let text = document.html();

    let placeholders = PlaceholderMap::locate(&document, &text);
    let encoded = placeholders.encode(&text)?;
    let newest = placeholders.decode(newest_message(&encoded));

    let mut tables = Vec::new();
    for (idx, grid) in extract_top_level_grids(&newest).iter().enumerate() {
        let Some(matched) = match_schema(grid, &vocabulary.fields) else {
            continue;
        };

        let records = normalize_table(&matched, &vocabulary.services).inspect_err(|e| {
            warn!("Rate table {idx} could not be normalized, dropping all tables: {e}");
        })?;

        if records.is_empty() {
            debug!("Rate table {idx} has no recognizable rows");
            continue;
        }
        tables.push(RateTable { records });
    }

    debug!("Accepted {} rate tables", tables.len());
    Ok(RateTableResult { tables })
}
