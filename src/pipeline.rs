// File: src/pipeline.rs
use crate::core::types::{Corpus, Filtered, Record};
use crate::error::{CorpusError, Result};
use crate::filters;
use crate::persistence::{load_corpus, save_corpus};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Number of sorted lines shown back to the operator after a sort.
pub const DEFAULT_PREVIEW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Numbers,
    Dedup,
    BothEnglish,
    Sort,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Numbers => "numbers",
            Operation::Dedup => "dedup",
            Operation::BothEnglish => "both-english",
            Operation::Sort => "sort",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "numbers" => Ok(Operation::Numbers),
            "dedup" => Ok(Operation::Dedup),
            "both-english" => Ok(Operation::BothEnglish),
            "sort" => Ok(Operation::Sort),
            other => Err(CorpusError::UnknownOperation(other.to_string())),
        }
    }
}

/// Summary of one operation over one corpus.
///
/// `records` counts well-formed input records only, so
/// `retained + removed == records` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub lines_read: usize,
    pub blank: usize,
    pub malformed: usize,
    pub records: usize,
    pub retained: usize,
    pub removed: usize,
    /// First output lines, filled in for sorts only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preview: Vec<String>,
}

/// Applies one operation in memory and returns the transformed corpus with its report.
pub fn apply(op: Operation, corpus: Corpus, preview_len: usize) -> (Corpus, Report) {
    let Corpus {
        records,
        lines_read,
        blank,
        malformed,
    } = corpus;
    let total = records.len();

    let (kept, removed): (Vec<Record>, usize) = match op {
        Operation::Numbers => split(filters::remove_number_words(records)),
        Operation::Dedup => split(filters::remove_duplicates(records)),
        Operation::BothEnglish => split(filters::remove_both_english(records)),
        Operation::Sort => (filters::sort_by_english(records), 0),
    };

    let preview = if op == Operation::Sort {
        kept.iter()
            .take(preview_len)
            .map(|r| r.raw_line.clone())
            .collect()
    } else {
        Vec::new()
    };

    let report = Report {
        operation: op,
        lines_read,
        blank,
        malformed,
        records: total,
        retained: kept.len(),
        removed,
        preview,
    };
    info!(
        operation = %op,
        lines_read,
        records = total,
        retained = report.retained,
        removed,
        "operation finished"
    );

    let corpus = Corpus {
        records: kept,
        lines_read,
        blank,
        malformed,
    };
    (corpus, report)
}

fn split(filtered: Filtered) -> (Vec<Record>, usize) {
    let removed = filtered.removed.len();
    (filtered.retained, removed)
}

/// Reads `input`, runs one operation, and writes the result to `output`.
/// Nothing is written if reading fails.
pub fn run_operation(op: Operation, input: &Path, output: &Path, preview_len: usize) -> Result<Report> {
    let corpus = load_corpus(input)?;
    info!(input = %input.display(), records = corpus.len(), "loaded corpus");
    let (corpus, report) = apply(op, corpus, preview_len);
    save_corpus(&corpus, output)?;
    info!(output = %output.display(), records = corpus.len(), "wrote corpus");
    Ok(report)
}

/// Runs several operations over one in-memory corpus, writing once at the end.
/// Each step's counts cover the records left by the steps before it.
pub fn run_chain(steps: &[Operation], input: &Path, output: &Path, preview_len: usize) -> Result<Vec<Report>> {
    if steps.is_empty() {
        return Err(CorpusError::NoSteps);
    }

    let mut corpus = load_corpus(input)?;
    info!(input = %input.display(), records = corpus.len(), "loaded corpus");

    let mut reports = Vec::with_capacity(steps.len());
    for &op in steps {
        let (next, report) = apply(op, corpus, preview_len);
        corpus = next;
        reports.push(report);
    }

    save_corpus(&corpus, output)?;
    info!(output = %output.display(), records = corpus.len(), "wrote corpus");
    Ok(reports)
}

/// Parses a comma-separated list such as `numbers,dedup,sort`.
pub fn parse_steps(list: &str) -> Result<Vec<Operation>> {
    let steps = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(Operation::from_str)
        .collect::<Result<Vec<_>>>()?;
    if steps.is_empty() {
        return Err(CorpusError::NoSteps);
    }
    Ok(steps)
}

pub fn remove_number_words(input: &Path, output: &Path) -> Result<Report> {
    run_operation(Operation::Numbers, input, output, DEFAULT_PREVIEW)
}

pub fn remove_duplicate_words(input: &Path, output: &Path) -> Result<Report> {
    run_operation(Operation::Dedup, input, output, DEFAULT_PREVIEW)
}

pub fn remove_both_english(input: &Path, output: &Path) -> Result<Report> {
    run_operation(Operation::BothEnglish, input, output, DEFAULT_PREVIEW)
}

pub fn sort_by_english_word(input: &Path, output: &Path) -> Result<Report> {
    run_operation(Operation::Sort, input, output, DEFAULT_PREVIEW)
}
