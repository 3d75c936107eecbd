//! vocabtrainer-core — Training engine, selection, scoring, and statistics.
//!
//! This crate holds the in-memory vocabulary pool and everything that works
//! on it. Terminal input and output are left to the CLI crate.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod selection;
pub mod session;
