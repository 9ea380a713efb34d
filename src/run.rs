use crate::cli::parser::Args;
use crate::config::ReportConfig;
use crate::github::client::{GitHubApi, HttpGitHubClient};
use crate::github::issues;
use crate::output;
use crate::render;
use crate::report;
use anyhow::Result;
use chrono::Utc;

/// Runs the whole report pipeline: search, count, enrich, sort, filter, render.
///
/// The report goes to the configured output file or stdout, and additionally to
/// `stdout_additional` when given. Nothing is written unless every step succeeded.
pub async fn run(args: Args, mut stdout_additional: Option<&mut dyn std::io::Write>) -> Result<()> {
    let config = ReportConfig::from_args(&args)?;
    let mut out = output::create_output(config.output.as_deref())?;
    let client = HttpGitHubClient::new(&args.api_url, &args.token)?;

    let rendered = build_report(&client, &config).await?;

    output::write_report(&rendered, &mut out, &mut stdout_additional)?;
    Ok(())
}

/// Produces the rendered report for `config` using `api`.
pub async fn build_report<A: GitHubApi>(api: &A, config: &ReportConfig) -> Result<String> {
    let issues = issues::search_all_issues(api, &config.query, config.per_page).await?;
    let counts = report::count_by_repository(&issues);

    let mut entries = report::enrich(api, &counts, Utc::now()).await?;
    report::sort_by_last_updated(&mut entries);
    let entries = report::retain_active(entries, config.cutoff);

    let template = render::load_template(&config.template)?;
    render::render_report(
        &template,
        &render::ReportContext {
            entries: &entries,
            label: &config.label,
            language: &config.language,
            cutoff: config.cutoff,
        },
    )
}
