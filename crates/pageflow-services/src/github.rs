//! GitHub repository star fetcher: one GET plus a JSON decode.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

const GITHUB_HOST: &str = "github.com";
const API_BASE: &str = "https://api.github.com/repos";
const USER_AGENT: &str = "pageflow-portfolio/0.1";

/// Subset of the repository payload the site displays.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepoInfo {
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not a github repository url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("github api error: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed github payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Extracts `(owner, repo)` from a `github.com` repository URL. Extra path
/// segments (tree, blob, ...) are tolerated; other hosts are rejected.
pub fn parse_repo_url(url: &str) -> Result<(String, String), RepoError> {
    let invalid = || RepoError::InvalidUrl(url.to_string());

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(invalid)?;
    let (host, path) = rest.split_once('/').ok_or_else(invalid)?;
    if host != GITHUB_HOST {
        warn!("ignoring non-github url {url:?}");
        return Err(invalid());
    }

    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(invalid()),
    }
}

/// Blocking GitHub API client.
pub struct GithubClient {
    http: reqwest::blocking::Client,
}

impl GithubClient {
    pub fn new() -> Result<Self, RepoError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetches star count and metadata for the repository behind `url`.
    pub fn fetch_repo(&self, url: &str) -> Result<RepoInfo, RepoError> {
        let (owner, repo) = parse_repo_url(url)?;

        let response = self
            .http
            .get(format!("{API_BASE}/{owner}/{repo}"))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoError::Status(status));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
