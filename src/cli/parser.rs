use crate::config;
use crate::github::client::endpoints;
use clap::Parser;
use std::path::PathBuf;

/// Renders an HTML list of repositories with open issues carrying a given label
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hacktoberlist", version, about)]
pub struct Args {
    /// GitHub token; leave empty for unauthenticated requests
    #[arg(short = 't', long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Path to the rendered template; stdout when empty
    #[arg(short = 'o', long, default_value = "")]
    pub output: String,

    /// Label the searched issues must carry
    #[arg(long, default_value = config::DEFAULT_LABEL)]
    pub label: String,

    /// Language of the repositories to search
    #[arg(long, default_value = config::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Repositories not updated after this date are left out (YYYY-MM-DD or RFC 3339)
    #[arg(long, default_value = config::DEFAULT_CUTOFF)]
    pub cutoff: String,

    /// Template used to render the report
    #[arg(long, default_value = config::DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Number of search results requested per page
    #[arg(long, default_value_t = config::DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = endpoints::API_BASE)]
    pub api_url: String,

    /// Log filter, e.g. `info` or `hacktoberlist=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Parse command line arguments (including program name)
///
/// Returns the clap error for `--help`, `--version` and invalid arguments so the
/// caller decides how to report it.
pub fn parse_args(args: &[String]) -> Result<Args, clap::Error> {
    Args::try_parse_from(args)
}
