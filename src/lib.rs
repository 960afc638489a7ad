// src/lib.rs

pub mod core;
pub mod error;
pub mod filters;
pub mod logging;
pub mod persistence;
pub mod pipeline;

pub use crate::core::types::{Corpus, Record};
pub use crate::error::{CorpusError, Result};
pub use crate::pipeline::{Operation, Report};
