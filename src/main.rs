use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use gitworth::cli::{Cli, Commands};
use gitworth::config::default_policy;
use gitworth::io::output::{create_writer, OutputFormat};
use gitworth::io::read_profile;

fn main() -> Result<()> {
    env_logger::init();

    // Configuration problems are fatal here, before any request runs.
    default_policy()
        .validate()
        .context("scoring policy failed startup validation")?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            profile,
            format,
            output,
            analysis_time,
        } => handle_analyze(profile, format, output, analysis_time),
        Commands::Policy => {
            println!("{}", serde_json::to_string_pretty(default_policy())?);
            Ok(())
        }
    }
}

fn handle_analyze(
    profile_path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    analysis_time: Option<String>,
) -> Result<()> {
    let analysis_time = parse_analysis_time(analysis_time)?;
    let record = read_profile(&profile_path)?;
    info!("analyzing profile {}", record.username);

    let assessment = gitworth::assess(&record, analysis_time)
        .with_context(|| format!("could not analyze profile {}", record.username))?;
    info!(
        "analysis complete for {}: score {}",
        assessment.username, assessment.overall_score
    );

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(&path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    create_writer(format, sink).write_assessment(&assessment)
}

fn parse_analysis_time(flag: Option<String>) -> Result<DateTime<Utc>> {
    match flag {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(&raw)
            .with_context(|| format!("invalid --at timestamp: {raw}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
