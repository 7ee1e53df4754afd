//! Report rendering and file output

pub mod formatter;

pub use formatter::{parse_output_format, render_report, save_to_file, OutputFormatter};
