use std::{
    fs, io,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{RepoConfig, TokenSource};

pub const USER_AGENT: &str = "design-tokens-fetcher";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{url} returned {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("could not decode content from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("could not read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The part of a GitHub contents API response we use.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: Option<String>,
    encoding: Option<String>,
}

/// Retrieves the raw token document. One attempt, no retries.
pub fn fetch(source: &TokenSource) -> Result<String, RetrievalError> {
    match source {
        TokenSource::Repository(config) => fetch_repository(&ureq::Agent::new_with_defaults(), config),
        TokenSource::Url(url) => fetch_url(&ureq::Agent::new_with_defaults(), url),
        TokenSource::File(path) => read_file(path),
    }
}

pub fn fetch_url(agent: &ureq::Agent, url: &str) -> Result<String, RetrievalError> {
    info!(url, "fetching tokens from URL");
    let response = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|err| request_error(url, err))?;
    response
        .into_body()
        .read_to_string()
        .map_err(|err| request_error(url, err))
}

pub fn fetch_repository(agent: &ureq::Agent, config: &RepoConfig) -> Result<String, RetrievalError> {
    info!(
        repository = %config.repo,
        branch = %config.branch,
        file = %config.path,
        "fetching tokens from GitHub"
    );
    let url = config.contents_url();
    let mut request = agent
        .get(&url)
        .header("Accept", GITHUB_ACCEPT)
        .header("User-Agent", USER_AGENT);
    if let Some(token) = &config.token {
        debug!("using GitHub token");
        request = request.header("Authorization", format!("token {token}"));
    }
    let response = request.call().map_err(|err| request_error(&url, err))?;
    let body: ContentsResponse = response
        .into_body()
        .read_json()
        .map_err(|err| RetrievalError::Decode {
            url: url.clone(),
            reason: format!("unexpected response: {err}"),
        })?;
    let decode_error = |reason: String| RetrievalError::Decode {
        url: url.clone(),
        reason,
    };
    if let Some(encoding) = body.encoding.as_deref() {
        if encoding != "base64" {
            return Err(decode_error(format!("unsupported encoding {encoding:?}")));
        }
    }
    let content = body
        .content
        .ok_or_else(|| decode_error("response has no content field".to_string()))?;
    decode_content(&content).map_err(decode_error)
}

pub fn read_file(path: &Path) -> Result<String, RetrievalError> {
    info!(path = %path.display(), "reading tokens from file");
    fs::read_to_string(path).map_err(|source| RetrievalError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes the base64 `content` field, which GitHub wraps with line breaks.
fn decode_content(content: &str) -> Result<String, String> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64
        .decode(compact)
        .map_err(|err| format!("invalid base64: {err}"))?;
    String::from_utf8(bytes).map_err(|err| format!("content is not UTF-8: {err}"))
}

fn request_error(url: &str, err: ureq::Error) -> RetrievalError {
    match err {
        ureq::Error::StatusCode(status) => RetrievalError::Status {
            url: url.to_string(),
            status,
            status_text: ureq::http::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or_default()
                .to_string(),
        },
        source => RetrievalError::Transport {
            url: url.to_string(),
            source,
        },
    }
}
