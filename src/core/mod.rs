// src/core/mod.rs
pub mod lexicon;
pub mod parser;
pub mod types;
