// File: src/core/lexicon.rs
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English words naming a number, all lowercase.
pub const NUMBER_WORDS: &[&str] = &[
    // cardinals 0-19
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
    // tens
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    // scales
    "hundred", "thousand", "million", "billion", "trillion",
    // ordinals 1st-19th
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
    "ninth", "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth",
    "fifteenth", "sixteenth", "seventeenth", "eighteenth", "nineteenth",
    // ordinal tens
    "twentieth", "thirtieth", "fortieth", "fiftieth", "sixtieth", "seventieth",
    "eightieth", "ninetieth",
    // ordinal scales
    "hundredth", "thousandth", "millionth", "billionth", "trillionth",
];

static NUMBER_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NUMBER_WORDS.iter().copied().collect());

/// Case-insensitive membership test against [`NUMBER_WORDS`]. O(1).
pub fn is_number_word(word: &str) -> bool {
    NUMBER_WORD_SET.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_has_no_duplicates() {
        assert_eq!(NUMBER_WORD_SET.len(), NUMBER_WORDS.len());
        assert_eq!(NUMBER_WORDS.len(), 65);
    }

    #[test]
    fn entries_are_lowercase() {
        for word in NUMBER_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn matches_ignore_case() {
        assert!(is_number_word("One"));
        assert!(is_number_word("TWELFTH"));
        assert!(is_number_word("trillionth"));
        assert!(!is_number_word("once"));
        assert!(!is_number_word("one hundred"));
        assert!(!is_number_word(""));
    }
}
