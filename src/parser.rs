//! Raw message ingestion

use crate::error::{ExtractError, Result};
use crate::types::{EmailData, NO_SUBJECT};
use chrono::{DateTime, Utc};
use encoding_rs::WINDOWS_1251;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::debug;

/// Parse raw RFC 5322 bytes into an `EmailData`
pub fn parse_email(raw: &[u8]) -> Result<EmailData> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Structure(e.to_string()))?;

    let subject = parsed
        .headers
        .get_first_value("Subject")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NO_SUBJECT.to_string());
    let sender = parsed.headers.get_first_value("From");
    let date = parsed
        .headers
        .get_first_value("Date")
        .and_then(|d| DateTime::parse_from_rfc2822(d.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let (text, html) = extract_body_parts(&parsed);

    debug!(
        "Parsed email '{}' (text: {}, html: {})",
        subject,
        text.is_some(),
        html.is_some()
    );

    let mut email = EmailData::new(subject, sender);
    email.date = date;
    email.text = text;
    email.html = html;
    Ok(email)
}

/// First `text/plain` and first `text/html` leaf parts
fn extract_body_parts(parsed: &ParsedMail<'_>) -> (Option<String>, Option<String>) {
    let mut text = None;
    let mut html = None;

    if parsed.subparts.is_empty() {
        let content_type = parsed.ctype.mimetype.to_lowercase();
        if content_type.contains("text/html") {
            html = decode_body(parsed);
        } else if content_type.contains("text/plain") {
            text = decode_body(parsed);
        }
    } else {
        extract_body_recursive(parsed, &mut text, &mut html);
    }

    (text, html)
}

fn extract_body_recursive(
    parsed: &ParsedMail<'_>,
    text: &mut Option<String>,
    html: &mut Option<String>,
) {
    for part in &parsed.subparts {
        if part.subparts.is_empty() {
            let content_type = part.ctype.mimetype.to_lowercase();
            if content_type.contains("text/plain") && text.is_none() {
                *text = decode_body(part);
            } else if content_type.contains("text/html") && html.is_none() {
                *html = decode_body(part);
            }
        } else {
            extract_body_recursive(part, text, html);
        }
    }
}

/// Decode a leaf body. Without a declared charset, bytes that are not UTF-8
/// are read as Windows-1251.
fn decode_body(part: &ParsedMail<'_>) -> Option<String> {
    if part.ctype.params.contains_key("charset") {
        return part.get_body().ok().filter(|b| !b.is_empty());
    }

    let bytes = part.get_body_raw().ok()?;
    if bytes.is_empty() {
        return None;
    }

    Some(match String::from_utf8(bytes) {
        Ok(body) => body,
        Err(e) => {
            let (body, _, _) = WINDOWS_1251.decode(e.as_bytes());
            body.into_owned()
        }
    })
}
