use std::{fmt, path::PathBuf};

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_TOKENS_PATH: &str = "design-tokens.json";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_PATH: &str = "src/design-tokens.css";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GITHUB_REPO is required when no source is given (expected <owner>/<name>)")]
    MissingRepo,
    #[error("invalid repository {0:?} (expected <owner>/<name>)")]
    InvalidRepo(String),
}

/// `<owner>/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}
impl RepoId {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepo(s.to_string());
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}
impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A token file inside a repository served through the GitHub contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub repo: RepoId,
    pub branch: String,
    pub path: String,
    pub token: Option<String>,
    pub api_url: String,
}
impl RepoConfig {
    pub fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_url.trim_end_matches('/'),
            self.repo.owner,
            self.repo.name,
            self.path.trim_start_matches('/'),
            self.branch
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Repository(RepoConfig),
    Url(String),
    File(PathBuf),
}
impl TokenSource {
    /// `http://` and `https://` arguments are fetched, anything else is read
    /// from disk.
    pub fn from_argument(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            TokenSource::Url(arg.to_string())
        } else {
            TokenSource::File(PathBuf::from(arg))
        }
    }
}
impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Repository(config) => {
                write!(f, "{}@{}:{}", config.repo, config.branch, config.path)
            }
            TokenSource::Url(url) => f.write_str(url),
            TokenSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw settings as collected from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub source: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub tokens_path: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
}
impl Settings {
    /// An explicit source wins; otherwise the repository settings are used
    /// and `repo` must be present.
    pub fn resolve(self) -> Result<TokenSource, ConfigError> {
        if let Some(source) = non_empty(self.source) {
            return Ok(TokenSource::from_argument(&source));
        }
        let repo = non_empty(self.repo).ok_or(ConfigError::MissingRepo)?;
        Ok(TokenSource::Repository(RepoConfig {
            repo: RepoId::parse(&repo)?,
            branch: non_empty(self.branch).unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            path: non_empty(self.tokens_path).unwrap_or_else(|| DEFAULT_TOKENS_PATH.to_string()),
            token: non_empty(self.token),
            api_url: non_empty(self.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
