//! Core types for ingested emails and extracted rate records

use crate::error::Result;
use crate::extracted::{RateTableResult, extract_rate_tables};
use crate::vocabulary::Vocabulary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Subject used when a message has none
pub const NO_SUBJECT: &str = "(no subject)";

/// Normalized triple extracted from one rate table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRateRecord {
    /// Canonical service name from the taxonomy
    pub service: String,

    /// Entry value, if the cell held a number
    pub entry: Option<f64>,

    /// Rate value
    pub rate: f64,
}

impl fmt::Display for CanonicalRateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(entry) => write!(f, "{}: entry {entry}, rate {}", self.service, self.rate),
            None => write!(f, "{}: rate {}", self.service, self.rate),
        }
    }
}

/// Split a `From`-style value into display name and address.
///
/// Handles `Name <user@host>`, `"Name" <user@host>`, `<user@host>` and bare
/// `user@host`. Either part is `None` when absent.
#[must_use]
pub fn parse_sender(raw: &str) -> (Option<String>, Option<String>) {
    let raw = raw.trim();

    if let Some(start) = raw.rfind('<')
        && let Some(len) = raw[start..].find('>')
    {
        let name = raw[..start].trim().trim_matches('"').trim();
        let address = raw[start + 1..start + len].trim();
        return (
            (!name.is_empty()).then(|| name.to_string()),
            address.contains('@').then(|| address.to_string()),
        );
    }

    if raw.contains('@') && !raw.contains(char::is_whitespace) {
        return (None, Some(raw.to_string()));
    }

    ((!raw.is_empty()).then(|| raw.to_string()), None)
}

/// An email as handed over by a fetching or decoding collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailData {
    /// Decoded subject line
    pub subject: String,

    /// Raw sender value
    pub sender: Option<String>,

    /// Display name derived from `sender`
    pub sender_name: Option<String>,

    /// Address derived from `sender`
    pub sender_address: Option<String>,

    /// Date sent
    pub date: Option<DateTime<Utc>>,

    /// Plain text body
    pub text: Option<String>,

    /// HTML body
    pub html: Option<String>,
}

impl EmailData {
    /// Build an email, deriving the sender name and address once
    pub fn new(subject: impl Into<String>, sender: Option<String>) -> Self {
        let (sender_name, sender_address) =
            sender.as_deref().map_or((None, None), parse_sender);

        Self {
            subject: subject.into(),
            sender,
            sender_name,
            sender_address,
            date: None,
            text: None,
            html: None,
        }
    }

    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Rate tables of the newest message, or the error that suppressed them
    pub fn try_rate_tables(&self, vocabulary: &Vocabulary) -> Result<RateTableResult> {
        self.html
            .as_deref()
            .map_or_else(|| Ok(RateTableResult::default()), |html| {
                extract_rate_tables(html, vocabulary)
            })
    }

    /// Rate tables of the newest message; empty when any table could not be normalized
    #[must_use]
    pub fn rate_tables(&self, vocabulary: &Vocabulary) -> RateTableResult {
        match self.try_rate_tables(vocabulary) {
            Ok(result) => {
                info!(
                    "Extracted {} rate tables from '{}'",
                    result.tables.len(),
                    self.subject
                );
                result
            }
            Err(e) => {
                warn!("Skipping rate tables of '{}': {e}", self.subject);
                RateTableResult::default()
            }
        }
    }
}
