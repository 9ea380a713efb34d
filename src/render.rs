use crate::report::ReportEntry;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Values exposed to the report template.
#[derive(Serialize, Debug)]
pub struct ReportContext<'a> {
    pub entries: &'a [ReportEntry],
    pub label: &'a str,
    pub language: &'a str,
    pub cutoff: DateTime<Utc>,
}

/// Reads the template source from `path`.
pub fn load_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Could not parse template: cannot read {}", path.display()))
}

/// Renders `source` with `context` into a string.
///
/// Output is HTML-escaped and referencing an undefined value is an error.
/// Templates can call `now()` for the current UTC time in RFC 3339 format.
pub fn render_report(source: &str, context: &ReportContext<'_>) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_function("now", now);

    info!("Parsing template...");
    let template = env
        .template_from_str(source)
        .context("Could not parse template")?;

    info!("Executing template...");
    template
        .render(context)
        .context("Could not execute template")
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
