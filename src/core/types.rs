// src/core/types.rs

/// One `{english, translation}` entry of a vocabulary corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub english: String,
    pub translation: String,
    /// The trimmed source line. Written back verbatim, never reformatted.
    pub raw_line: String,
}

/// The ordered records of one input file, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub records: Vec<Record>,
    /// Raw lines read, including blank and malformed ones.
    pub lines_read: usize,
    pub blank: usize,
    pub malformed: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the corpus in file form: one raw line per record, each newline-terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.records.iter().map(|r| r.raw_line.len() + 1).sum());
        for record in &self.records {
            out.push_str(&record.raw_line);
            out.push('\n');
        }
        out
    }
}

/// Result of a filtering transform: what survived, and what was dropped.
#[derive(Debug, Clone, Default)]
pub struct Filtered {
    pub retained: Vec<Record>,
    pub removed: Vec<Record>,
}
