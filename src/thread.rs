//! Quoted-thread splitting on reply header blocks

use regex::Regex;
use std::sync::LazyLock;

/// English reply header block: `Sent:` / `To:` / optional `Cc:` / `Subject:` lines
pub const ENGLISH_QUOTE_HEADER: &str = r".*sent:.*\n.*to:.*\n(?:.*cc:.*\n)?.*subject:.*";

/// Russian reply header block: `Отправлено:` / `Кому:` / optional `Копия:` / `Тема:` lines
pub const RUSSIAN_QUOTE_HEADER: &str = r".*отправлено:.*\n.*кому:.*\n(?:.*копия:.*\n)?.*тема:.*";

static QUOTE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im)^(?:{ENGLISH_QUOTE_HEADER}|{RUSSIAN_QUOTE_HEADER})$"
    ))
    .unwrap()
});

/// Split a thread into messages, newest first.
///
/// Segment 0 is everything before the first header block; each later segment
/// is the text between two blocks. Text without a header block is one segment.
#[must_use]
pub fn split_thread(text: &str) -> Vec<&str> {
    QUOTE_HEADER_REGEX.split(text).collect()
}

/// Text of the most recent message in a thread
#[must_use]
pub fn newest_message(text: &str) -> &str {
    QUOTE_HEADER_REGEX
        .find(text)
        .map_or(text, |header| &text[..header.start()])
}
