// File: src/core/parser.rs
use crate::core::types::{Corpus, Record};
use tracing::debug;

/// Parses one line of the form `{english, translation}`.
///
/// The line is trimmed first. Returns `None` for blank lines and for anything
/// not wrapped in braces or without a comma inside them. Only the first comma
/// separates the fields, so translations may contain commas of their own.
pub fn parse_record(line: &str) -> Option<Record> {
    let trimmed = line.trim();
    if trimmed.len() < 2 || !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return None;
    }

    let inner = &trimmed[1..trimmed.len() - 1];
    let (english, translation) = inner.split_once(',')?;

    Some(Record {
        english: english.trim().to_string(),
        translation: translation.trim().to_string(),
        raw_line: trimmed.to_string(),
    })
}

/// Splits text on `\n`, `\r\n` and lone `\r`, like a universal-newline reader.
/// A trailing line break does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

impl Corpus {
    /// Parses a whole file's text. Blank and malformed lines are counted and skipped.
    pub fn parse(text: &str) -> Self {
        let mut corpus = Corpus::default();

        for (idx, line) in split_lines(text).enumerate() {
            corpus.lines_read += 1;
            if line.trim().is_empty() {
                corpus.blank += 1;
                continue;
            }
            match parse_record(line) {
                Some(record) => corpus.records.push(record),
                None => {
                    debug!(line_no = idx + 1, line = line.trim(), "skipping malformed line");
                    corpus.malformed += 1;
                }
            }
        }

        corpus
    }
}
