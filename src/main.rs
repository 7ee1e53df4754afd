//! CV matcher: finance CV analysis, job matching and cover letters

use clap::Parser;
use cv_matcher::cli::{self, Cli, Commands, ConfigAction};
use cv_matcher::config::Config;
use cv_matcher::error::{CvMatcherError, Result};
use cv_matcher::input::{read_pasted_text, InputManager};
use cv_matcher::output::{parse_output_format, render_report, save_to_file};
use cv_matcher::processing::analysis::{analyze, AnalysisRequest};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Reset and path must work even when the stored config no longer loads
    if let Commands::Config {
        action: Some(action @ (ConfigAction::Reset | ConfigAction::Path)),
    } = &cli.command
    {
        if let Err(e) = run_config_maintenance(action, cli.config.as_deref()) {
            error!("Command failed: {}", e);
            process::exit(1);
        }
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            text,
            name,
            output,
            save,
            save_letter,
            no_color,
            detailed,
        } => {
            let format = match output {
                Some(output) => parse_output_format(&output).map_err(CvMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let resume_text = match (resume, text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, cli::SUPPORTED_EXTENSIONS)
                        .map_err(|e| CvMatcherError::InvalidInput(format!("CV file: {}", e)))?;
                    InputManager::new().extract_text(&path).await?
                }
                (None, Some(text)) => text,
                (None, None) => {
                    println!("Please paste your CV text below (end with a single line 'END'):");
                    read_pasted_text(std::io::stdin().lock())?
                }
            };

            if resume_text.trim().is_empty() {
                warn!("CV text is empty; no qualifications can be detected");
            }

            if detailed {
                println!("\n=== Extracted CV Text ===");
                println!("{}", truncate_text(&resume_text, 500));
            }

            let mut request = AnalysisRequest::new(resume_text);
            request.applicant_name = name;
            let report = analyze(&request, &config);

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let rendered = render_report(&report, format, use_colors, config.output.pretty_json)?;

            match save {
                Some(path) => {
                    save_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                    println!("Report saved to '{}'", path.display());
                }
                None => println!("{}", rendered),
            }

            if let Some(target) = save_letter {
                match &report.cover_letter {
                    Some(letter) => {
                        let path = target.unwrap_or_else(|| PathBuf::from(letter.suggested_filename()));
                        save_to_file(&letter.body, &path)?;
                        println!("Cover letter saved successfully as '{}'!", path.display());
                    }
                    None if report.has_matches() => {
                        warn!("No cover letter generated: pass --name to write one");
                    }
                    None => {
                        println!("No cover letter generated since no matching jobs were found.");
                    }
                }
            }
        }

        Commands::Jobs { title } => {
            let jobs: Vec<_> = match &title {
                Some(title) => config.get_job_by_title(title).into_iter().collect(),
                None => config.catalog.iter().collect(),
            };

            if jobs.is_empty() {
                return Err(CvMatcherError::InvalidInput(format!(
                    "No job posting titled '{}'",
                    title.unwrap_or_default()
                )));
            }

            for (i, job) in jobs.iter().enumerate() {
                println!("{}. {}", i + 1, job.title);
                println!("   Skills (any of): {}", job.required_skills.join(", "));
                println!("   Degree: {}", job.required_degree);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => show_config(&config)?,

            Some(action) => run_config_maintenance(&action, config_path.as_deref())?,
        },
    }

    Ok(())
}

/// Reset and path never parse the stored file; show loads it first
fn run_config_maintenance(action: &ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Reset => {
            match config_path {
                Some(path) => Config::default().save_to(path)?,
                None => {
                    Config::reset()?;
                }
            }
            info!("Configuration reset to defaults");
            println!("Configuration reset to defaults.");
        }
        ConfigAction::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_path);
            println!("{}", path.display());
        }
        ConfigAction::Show => show_config(&load_config(config_path)?)?,
    }
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| CvMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;
    println!("{}", content);
    Ok(())
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}
