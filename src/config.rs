use crate::cli::parser::Args;
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::PathBuf;

pub const DEFAULT_LABEL: &str = "hacktoberfest";
pub const DEFAULT_LANGUAGE: &str = "julia";
/// Repositories last updated at or before this date are considered inactive.
pub const DEFAULT_CUTOFF: &str = "2021-04-01";
pub const DEFAULT_TEMPLATE: &str = "template.html";
pub const DEFAULT_PER_PAGE: u32 = 100;
/// Largest page size the GitHub search API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Settings of a single report run, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub label: String,
    pub language: String,
    /// Full issue search query sent to GitHub.
    pub query: String,
    pub per_page: u32,
    /// Only repositories updated strictly after this instant are reported.
    pub cutoff: DateTime<Utc>,
    pub template: PathBuf,
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl ReportConfig {
    /// Validates `args` and resolves them into a `ReportConfig`.
    ///
    /// Fails when the label or language is blank, the page size is out of
    /// range or the cutoff cannot be parsed.
    pub fn from_args(args: &Args) -> Result<Self> {
        let label = args.label.trim();
        let language = args.language.trim();
        if label.is_empty() {
            return Err(anyhow!("Label must not be empty"));
        }
        if language.is_empty() {
            return Err(anyhow!("Language must not be empty"));
        }
        if !(1..=MAX_PER_PAGE).contains(&args.per_page) {
            return Err(anyhow!(
                "Page size must be between 1 and {MAX_PER_PAGE}, got {}",
                args.per_page
            ));
        }

        Ok(ReportConfig {
            label: label.to_string(),
            language: language.to_string(),
            query: search_query(label, language),
            per_page: args.per_page,
            cutoff: parse_cutoff(&args.cutoff)?,
            template: args.template.clone(),
            output: (!args.output.is_empty()).then(|| PathBuf::from(&args.output)),
        })
    }
}

/// Builds the issue search query for open issues with `label` in `language` repositories.
///
/// Labels containing spaces are quoted so GitHub treats them as one term.
pub fn search_query(label: &str, language: &str) -> String {
    let label = if label.contains(' ') {
        format!("\"{label}\"")
    } else {
        label.to_string()
    };
    format!("is:issue is:open language:{language} label:{label}")
}

/// Parses a cutoff given either as a calendar date (midnight UTC) or as an RFC 3339 timestamp.
pub fn parse_cutoff(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid cutoff date: {value}"))
}
