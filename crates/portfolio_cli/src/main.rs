//! Portfolio progression CLI.
//!
//! # Responsibility
//! - Enumerate record files and read the skill list from disk.
//! - Print the progression report as text or JSON.

mod error;
mod sources;

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use error::CliError;
use log::info;
use portfolio_core::config::parse_config_date;
use portfolio_core::{
    default_log_level, init_logging, DuplicatePolicy, PortfolioService, ProgressionConfig,
    ProgressionReport, RecordRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Compute portfolio skill progression")]
struct Cli {
    /// Directory containing markdown project records
    #[arg(long)]
    records: PathBuf,

    /// Skill declaration file (`Name : [ CATEGORY, Level ]` per line)
    #[arg(long)]
    skills: PathBuf,

    /// JSON progression config; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluation instant (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long)]
    now: Option<String>,

    /// What to do when two records share an id
    #[arg(long, value_enum, default_value_t = OnDuplicate::KeepFirst)]
    on_duplicate: OnDuplicate,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level for file logging
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnDuplicate {
    KeepFirst,
    KeepLast,
    Reject,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::KeepFirst => Self::KeepFirst,
            OnDuplicate::KeepLast => Self::KeepLast,
            OnDuplicate::Reject => Self::Reject,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let config = match cli.config.as_deref() {
        Some(path) => {
            let config = ProgressionConfig::from_json_str(&sources::read_text(path)?)?;
            config.validate()?;
            config
        }
        None => ProgressionConfig::default(),
    };
    let now = resolve_now(cli.now.as_deref())?;

    let record_sources = sources::load_record_sources(&cli.records)?;
    let repo = RecordRepository::load_all_with_policy(&record_sources, cli.on_duplicate.into())?;
    let skill_text = sources::read_text(&cli.skills)?;
    info!(
        "event=cli_run module=cli status=ok records_dir={} sources={} now={}",
        cli.records.display(),
        record_sources.len(),
        now.to_rfc3339()
    );

    let report = PortfolioService::new(config).report_from_text(&repo, &skill_text, now);
    if cli.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_text(&report, &repo))
    }
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match raw {
        None => Ok(Utc::now()),
        Some(value) => {
            parse_config_date(value).ok_or_else(|| CliError::InvalidNow(value.to_string()))
        }
    }
}

fn render_text(report: &ProgressionReport, repo: &RecordRepository) -> String {
    let breakdown = &report.breakdown;
    let mut out = format!(
        "LV. {:.2}  {}  ({} records, {} completed)\n",
        report.level,
        report.title,
        repo.len(),
        report.completed_records
    );
    out.push_str(&format!(
        "study {:.2} | career {:.2} | projects {:.2} | skills {:.2}\n",
        breakdown.study_score,
        breakdown.career_score,
        breakdown.project_score,
        breakdown.skill_score
    ));
    for (category, skills) in &report.skills_by_category {
        out.push_str(&format!("\n[{category}]\n"));
        for skill in skills {
            out.push_str(&format!(
                "  {:<4} {:>6.2}  {}\n",
                skill.rank, skill.level, skill.name
            ));
        }
    }
    out.trim_end().to_string()
}
