//! Qualification extraction, job matching and advice generation

pub mod vocabulary;
pub mod extractor;
pub mod catalog;
pub mod matcher;
pub mod advisor;
pub mod letter;
pub mod analysis;
