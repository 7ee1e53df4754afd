//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analysis::AnalysisReport;
use crate::processing::letter::CoverLetter;
use crate::processing::vocabulary::KeywordSet;
use askama::Template;
use chrono::{DateTime, Utc};
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

const NO_MATCHES: &str = "No matching jobs found.";

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

/// Askama template for Markdown output
#[derive(Template)]
#[template(
    ext = "md",
    source = r#"# CV Analysis Report

_Generated: {{ generated_at }}_

## Extracted Qualifications

- **Skills:** {{ skills }}
- **Degrees:** {{ degrees }}
- **Experiences:** {{ experiences }}

## Matched Job Opportunities

{% if matched_jobs.is_empty() %}{{ no_matches }}
{% else %}{% for job in matched_jobs %}- {{ job }}
{% endfor %}{% endif %}
## Career Advice

{{ advice }}
{% if let Some(letter) = cover_letter %}
## Cover Letter: {{ letter.job_title }}

```text
{{ letter.body }}```
{% endif %}"#
)]
struct MarkdownTemplate<'a> {
    generated_at: String,
    skills: String,
    degrees: String,
    experiences: String,
    matched_jobs: &'a [String],
    no_matches: &'a str,
    advice: &'a str,
    cover_letter: Option<&'a CoverLetter>,
}

/// JSON envelope adding the generation timestamp
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

fn list_or_none(set: &KeywordSet) -> String {
    if set.is_empty() {
        "None".to_string()
    } else {
        set.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        let header = format!("=== {} ===", title);
        if self.use_colors {
            format!("\n{}\n", header.bold().blue())
        } else {
            format!("\n{}\n", header)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let qualifications = &report.qualifications;

        output.push_str(&self.format_header("Detected Skills"));
        output.push_str(&format!("{}\n", list_or_none(&qualifications.skills)));

        output.push_str(&self.format_header("Detected Degrees"));
        output.push_str(&format!("{}\n", list_or_none(&qualifications.degrees)));

        output.push_str(&self.format_header("Detected Experiences"));
        output.push_str(&format!("{}\n", list_or_none(&qualifications.experiences)));

        output.push_str(&self.format_header("Matched Job Opportunities"));
        if report.matched_jobs.is_empty() {
            output.push_str(&format!("{}\n", self.colorize(NO_MATCHES, Color::Yellow)));
        } else {
            for job in &report.matched_jobs {
                output.push_str(&format!("- {}\n", self.colorize(job, Color::Green)));
            }
        }

        output.push_str(&self.format_header("Career Advice"));
        output.push_str(&format!("{}\n", self.colorize(&report.advice.message, Color::Cyan)));

        if let Some(letter) = &report.cover_letter {
            output.push_str(&self.format_header("Generated Cover Letter"));
            output.push_str(&letter.body);
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let envelope = JsonReport {
            generated_at: Utc::now(),
            report,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let qualifications = &report.qualifications;
        let template = MarkdownTemplate {
            generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            skills: list_or_none(&qualifications.skills),
            degrees: list_or_none(&qualifications.degrees),
            experiences: list_or_none(&qualifications.experiences),
            matched_jobs: &report.matched_jobs,
            no_matches: NO_MATCHES,
            advice: &report.advice.message,
            cover_letter: report.cover_letter.as_ref(),
        };
        Ok(template.render()?)
    }
}

/// Pick the formatter for a format and render the report
pub fn render_report(report: &AnalysisReport, format: OutputFormat, use_colors: bool, pretty_json: bool) -> Result<String> {
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };
    formatter.format_report(report)
}

pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

pub fn save_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::analysis::{analyze, AnalysisRequest};
    use tempfile::TempDir;

    fn matched_report() -> AnalysisReport {
        let request = AnalysisRequest::new("Excel and Financial Modeling\nBachelor of Commerce")
            .with_applicant_name("Jane Doe");
        analyze(&request, &Config::default())
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false).format_report(&matched_report()).unwrap();
        assert!(output.contains("=== Detected Skills ===\nExcel, Financial Modeling\n"));
        assert!(output.contains("=== Detected Experiences ===\nNone\n"));
        assert!(output.contains("- Financial Analyst\n"));
        assert!(output.contains("=== Generated Cover Letter ==="));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_no_matches() {
        let report = analyze(&AnalysisRequest::new(""), &Config::default());
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains(NO_MATCHES));
        assert!(!output.contains("Cover Letter"));
    }

    #[test]
    fn test_json_contains_report_fields() {
        let output = JsonFormatter::new(false).format_report(&matched_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["matched_jobs"][0], "Financial Analyst");
        assert_eq!(value["advice"]["kind"], "ready");
        assert_eq!(value["qualifications"]["degrees"][0], "Bachelor");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["cover_letter"]["job_title"], "Financial Analyst");
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter.format_report(&matched_report()).unwrap();
        assert!(output.starts_with("# CV Analysis Report"));
        assert!(output.contains("- **Skills:** Excel, Financial Modeling"));
        assert!(output.contains("- Financial Analyst\n"));
        assert!(output.contains("## Cover Letter: Financial Analyst"));
        assert!(output.contains("Sincerely,\nJane Doe"));
    }

    #[test]
    fn test_markdown_without_matches() {
        let report = analyze(&AnalysisRequest::new("PowerPoint"), &Config::default());
        let output = MarkdownFormatter.format_report(&report).unwrap();
        assert!(output.contains(NO_MATCHES));
        assert!(!output.contains("## Cover Letter"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_render_report_dispatch() {
        let report = matched_report();

        let console = render_report(&report, OutputFormat::Console, false, true).unwrap();
        assert!(console.starts_with("\n=== Detected Skills ==="));

        let json = render_report(&report, OutputFormat::Json, false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matched_jobs"][0], "Financial Analyst");
        assert!(!json.contains('\n'));

        let markdown = render_report(&report, OutputFormat::Markdown, false, true).unwrap();
        assert!(markdown.starts_with("# CV Analysis Report"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("letter.txt");
        save_to_file("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
