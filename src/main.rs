use std::{path::PathBuf, process};

use chrono::Utc;
use clap::Parser;
use design_tokens_fetch::{
    config::{Settings, DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_OUTPUT_PATH, DEFAULT_TOKENS_PATH},
    run,
    tokens::FALLBACK_TOKENS,
    Error,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fetch design tokens and write them as CSS custom properties.
///
/// With no SOURCE, tokens are fetched from a GitHub repository configured
/// through the environment (or a .env file).
#[derive(Parser)]
#[command(name = "fetch-tokens", version, about)]
struct Cli {
    /// Local file path or http(s) URL of a token document
    source: Option<String>,

    /// Repository holding the tokens, as <owner>/<name>
    #[arg(long, env = "GITHUB_REPO")]
    repo: Option<String>,

    /// Branch or other ref to read from
    #[arg(long, env = "GITHUB_BRANCH", default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Path of the token file inside the repository
    #[arg(long, env = "TOKENS_PATH", default_value = DEFAULT_TOKENS_PATH)]
    tokens_path: String,

    /// Access token for private repositories
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where to write the stylesheet
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}
impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            source: self.source.clone(),
            repo: self.repo.clone(),
            branch: Some(self.branch.clone()),
            tokens_path: Some(self.tokens_path.clone()),
            token: self.token.clone(),
            api_url: Some(self.api_url.clone()),
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = cli
        .settings()
        .resolve()
        .map_err(Error::from)
        .and_then(|source| {
            info!(%source, "importing design tokens");
            run(&source, FALLBACK_TOKENS, &cli.output, Utc::now())
        });

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
