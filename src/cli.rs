//! CLI interface for the CV matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "cv-matcher")]
#[command(about = "Finance CV matcher and cover letter generator")]
#[command(long_about = "Extract skills, degrees and experience from a CV, match them against finance job postings, and generate career advice and a cover letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CV. Reads pasted text from stdin (ending with a line `END`)
    /// when neither --resume nor --text is given
    Analyze {
        /// Path to CV file (PDF, DOCX, TXT, MD)
        #[arg(short, long, conflicts_with = "text")]
        resume: Option<PathBuf>,

        /// CV text given inline
        #[arg(short, long)]
        text: Option<String>,

        /// Applicant name; enables cover letter generation
        #[arg(short, long)]
        name: Option<String>,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Save the cover letter, to the given path or Cover_Letter_<Job>.txt
        #[arg(long, num_args = 0..=1)]
        save_letter: Option<Option<PathBuf>>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,

        /// Print a preview of the extracted CV text
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the configured job postings
    Jobs {
        /// Show only the posting with this title
        title: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.DOCX"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.doc"), SUPPORTED_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("cv"), SUPPORTED_EXTENSIONS).is_err());
    }

    #[test]
    fn test_parse_analyze_with_letter_flag() {
        let cli = Cli::parse_from(["cv-matcher", "analyze", "--text", "MBA", "--name", "Jane Doe", "--save-letter"]);
        match cli.command {
            Commands::Analyze { text, name, save_letter, resume, .. } => {
                assert_eq!(text.as_deref(), Some("MBA"));
                assert_eq!(name.as_deref(), Some("Jane Doe"));
                assert_eq!(save_letter, Some(None));
                assert!(resume.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_resume_and_text_conflict() {
        let result = Cli::try_parse_from(["cv-matcher", "analyze", "--resume", "cv.pdf", "--text", "MBA"]);
        assert!(result.is_err());
    }
}
