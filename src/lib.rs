//! CV matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{CvMatcherError, Result};
pub use processing::analysis::{analyze, AnalysisReport, AnalysisRequest};
