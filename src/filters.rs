// File: src/filters.rs
//! The four corpus transforms. Each one takes the records by value and hands
//! back what it keeps; nothing here touches the filesystem.
use crate::core::lexicon::is_number_word;
use crate::core::types::{Filtered, Record};
use std::collections::HashSet;
use tracing::info;

/// Drops records whose English field is a number word, compared case-insensitively.
pub fn remove_number_words(records: Vec<Record>) -> Filtered {
    let mut out = Filtered::default();
    for record in records {
        if is_number_word(&record.english) {
            info!(word = %record.english, line = %record.raw_line, "removed number word");
            out.removed.push(record);
        } else {
            out.retained.push(record);
        }
    }
    out
}

/// Keeps the first record for each distinct English field. Case-sensitive, so
/// `Cat` and `cat` both survive. O(n) with one hash lookup per record.
pub fn remove_duplicates(records: Vec<Record>) -> Filtered {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Filtered::default();
    for record in records {
        if seen.insert(record.english.clone()) {
            out.retained.push(record);
        } else {
            info!(word = %record.english, line = %record.raw_line, "removed duplicate");
            out.removed.push(record);
        }
    }
    out
}

/// ASCII stands in for "English": any code point >= 0x80 makes the text
/// non-English. Spaces and hyphens are stripped first; an empty result counts as English.
pub fn is_english_text(text: &str) -> bool {
    text.chars()
        .filter(|&c| c != ' ' && c != '-')
        .all(|c| c.is_ascii())
}

/// Drops records where both the English field and the translation look English.
pub fn remove_both_english(records: Vec<Record>) -> Filtered {
    let mut out = Filtered::default();
    for record in records {
        if is_english_text(&record.english) && is_english_text(&record.translation) {
            info!(line = %record.raw_line, "removed both-English record");
            out.removed.push(record);
        } else {
            out.retained.push(record);
        }
    }
    out
}

/// Stable sort by lowercased English field. Equal keys keep their input order.
pub fn sort_by_english(records: Vec<Record>) -> Vec<Record> {
    let mut keyed: Vec<(String, Record)> = records
        .into_iter()
        .map(|record| (record.english.to_lowercase(), record))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_record;

    fn records(lines: &[&str]) -> Vec<Record> {
        lines.iter().filter_map(|l| parse_record(l)).collect()
    }

    fn raw(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.raw_line.as_str()).collect()
    }

    #[test]
    fn number_words_are_removed_ignoring_case() {
        let out = remove_number_words(records(&["{One, 하나}", "{apple, 사과}", "{THIRD, 셋째}"]));
        assert_eq!(raw(&out.retained), vec!["{apple, 사과}"]);
        assert_eq!(raw(&out.removed), vec!["{One, 하나}", "{THIRD, 셋째}"]);
    }

    #[test]
    fn number_filter_only_matches_whole_field() {
        let out = remove_number_words(records(&["{one day, 하루}", "{someone, 누군가}"]));
        assert_eq!(out.retained.len(), 2);
        assert!(out.removed.is_empty());
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let out = remove_duplicates(records(&["{Cat, 고양이}", "{cat, 고양이}"]));
        assert_eq!(out.retained.len(), 2);
        assert!(out.removed.is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let out = remove_duplicates(records(&[
            "{cat, 고양이}",
            "{dog, 개}",
            "{cat, 고양이}",
            "{cat, 야옹이}",
            "{bird, 새}",
        ]));
        assert_eq!(raw(&out.retained), vec!["{cat, 고양이}", "{dog, 개}", "{bird, 새}"]);
        assert_eq!(raw(&out.removed), vec!["{cat, 고양이}", "{cat, 야옹이}"]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let first = remove_duplicates(records(&["{a, 가}", "{b, 나}", "{a, 다}", "{A, 라}"]));
        let kept = first.retained.clone();
        let second = remove_duplicates(first.retained);
        assert_eq!(second.retained, kept);
        assert!(second.removed.is_empty());
    }

    #[test]
    fn english_detection_follows_ascii() {
        assert!(is_english_text("hello"));
        assert!(is_english_text("well-known thing"));
        assert!(is_english_text("!?"));
        assert!(is_english_text(""));
        assert!(is_english_text(" - "));
        assert!(!is_english_text("안녕"));
        assert!(!is_english_text("café"));
    }

    #[test]
    fn both_english_records_are_dropped() {
        let out = remove_both_english(records(&[
            "{hello, world}",
            "{hello, 안녕}",
            "{, 안녕}",
            "{hello, }",
        ]));
        assert_eq!(raw(&out.retained), vec!["{hello, 안녕}", "{, 안녕}"]);
        assert_eq!(raw(&out.removed), vec!["{hello, world}", "{hello, }"]);
    }

    #[test]
    fn non_ascii_english_side_is_kept() {
        let out = remove_both_english(records(&["{안녕, hello}"]));
        assert_eq!(out.retained.len(), 1);
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let sorted = sort_by_english(records(&["{Banana, 바나나}", "{apple, 사과}", "{Apple, 애플}"]));
        assert_eq!(raw(&sorted), vec!["{apple, 사과}", "{Apple, 애플}", "{Banana, 바나나}"]);
    }

    #[test]
    fn sort_keeps_input_order_for_identical_keys() {
        let sorted = sort_by_english(records(&["{b, 2}", "{A, 1}", "{a, 3}", "{B, 4}", "{a, 5}"]));
        assert_eq!(raw(&sorted), vec!["{A, 1}", "{a, 3}", "{a, 5}", "{b, 2}", "{B, 4}"]);
    }

    #[test]
    fn count_is_conserved() {
        let input = records(&["{one, 하나}", "{x, y}", "{x, 엑스}", "{z, 지}", "{Two, 둘}"]);
        let total = input.len();
        let filters: [fn(Vec<Record>) -> Filtered; 3] =
            [remove_number_words, remove_duplicates, remove_both_english];
        for filter in filters {
            let out = filter(input.clone());
            assert_eq!(out.retained.len() + out.removed.len(), total);
        }
    }
}
