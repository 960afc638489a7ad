use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write corpus {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown operation: {0} (expected numbers, dedup, both-english or sort)")]
    UnknownOperation(String),

    #[error("no operations given")]
    NoSteps,
}

pub type Result<T> = std::result::Result<T, CorpusError>;
