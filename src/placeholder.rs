//! Table placeholders: locate top-level tables in a serialized document and
//! swap them for opaque tokens so text surgery never cuts through a table.

use crate::error::{ExtractError, Result};
use scraper::{Html, Selector};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;
use uuid::Uuid;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));

/// Opaque marker substituted for a table's HTML
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderToken(String);

impl PlaceholderToken {
    /// Fresh token, unique for the lifetime of the process
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn wrapped(&self) -> String {
        format!("\n{}\n", self.0)
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A located table: its serialized HTML and byte span `start..end` in the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePosition {
    pub html: String,
    pub start: usize,
    pub end: usize,
    pub token: PlaceholderToken,
}

/// Ordered, non-overlapping table positions for one document.
///
/// A map is only meaningful for the exact text it was located against.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    positions: Vec<TablePosition>,
}

impl PlaceholderMap {
    /// Find every non-nested table of `document` inside `text`, its serialization.
    ///
    /// Tables are visited in document order and searched for just after the
    /// previous table's start, so a table found inside the span of the last
    /// recorded one is nested and skipped. A table whose serialization cannot
    /// be found is skipped as well.
    #[must_use]
    pub fn locate(document: &Html, text: &str) -> Self {
        let mut positions: Vec<TablePosition> = Vec::new();
        let mut cursor = 0;

        for table in document.select(&TABLE_SELECTOR) {
            let html = table.html();
            let Some(offset) = text.get(cursor..).and_then(|rest| rest.find(&html)) else {
                debug!("Table serialization not found in document text, skipping");
                continue;
            };

            let start = cursor + offset;
            // serialization starts with '<', so the next byte is a char boundary
            cursor = start + 1;

            if positions.last().is_some_and(|last| start < last.end) {
                debug!("Skipping nested table at offset {start}");
                continue;
            }

            let end = start + html.len();
            positions.push(TablePosition {
                html,
                start,
                end,
                token: PlaceholderToken::generate(),
            });
        }

        debug!("Located {} top-level tables", positions.len());
        Self { positions }
    }

    /// Replace each table span with its token on a line of its own
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut encoded = String::with_capacity(text.len());
        let mut last_end = 0;

        for position in &self.positions {
            let matches = position.start >= last_end
                && text.get(position.start..position.end) == Some(position.html.as_str());
            if !matches {
                return Err(ExtractError::PlaceholderMismatch {
                    start: position.start,
                    end: position.end,
                });
            }

            encoded.push_str(&text[last_end..position.start]);
            encoded.push_str(&position.token.wrapped());
            last_end = position.end;
        }

        encoded.push_str(&text[last_end..]);
        Ok(encoded)
    }

    /// Restore table HTML for every token occurring in `text`.
    ///
    /// Works on any substring of an encoded document; a token that lost its
    /// surrounding newlines is still restored.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        let mut decoded = text.to_string();
        for position in &self.positions {
            decoded = decoded
                .replace(&position.token.wrapped(), &position.html)
                .replace(position.token.as_str(), &position.html);
        }
        decoded
    }

    #[must_use]
    pub fn positions(&self) -> &[TablePosition] {
        &self.positions
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
