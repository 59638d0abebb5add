use reqwest::{header, Client, StatusCode, Url};

use crate::error::{AppError, Result};
use crate::models::{ContentEntry, RepoCoordinate};

const LISTING_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const USER_AGENT: &str = concat!("repo-reflect/", env!("CARGO_PKG_VERSION"));

/// Thin client over the GitHub contents API.
///
/// Every request carries the configured bearer token. There are no retries
/// and no client-side timeout.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let api_url = api_url.into();
        let api_url = Url::parse(&api_url)
            .map_err(|e| AppError::Config(format!("Invalid GitHub API URL '{}': {}", api_url, e)))?;

        Ok(Self {
            client,
            api_url,
            token: token.into(),
        })
    }

    /// `{api}/repos/{owner}/{repo}/contents/{path}` with every segment
    /// percent-encoded, so names like `C#` or `100%` stay in the path.
    fn contents_url(&self, repo: &RepoCoordinate, path: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", repo.owner.as_str(), repo.name.as_str(), "contents"])
                .extend(path.split('/'));
        }
        url
    }

    /// Lists one directory level. An empty `path` lists the repository root.
    pub async fn list_directory(&self, repo: &RepoCoordinate, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_url(repo, path);
        let list_error = |reason: String| AppError::DirectoryList {
            path: display_path(path).to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, LISTING_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| list_error(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND && path.is_empty() {
            return Err(AppError::RepoNotFound(repo.to_string()));
        }
        if !status.is_success() {
            return Err(list_error(format!("HTTP {}", status)));
        }

        // A path naming a file yields a single object instead of an array.
        response
            .json::<Vec<ContentEntry>>()
            .await
            .map_err(|e| list_error(format!("unexpected listing body: {}", e)))
    }

    /// Fetches the raw content of one file. `path` only labels errors.
    pub async fn fetch_file_content(&self, path: &str, download_url: &str) -> Result<String> {
        let fetch_error = |reason: String| AppError::Fetch {
            path: path.to_string(),
            reason,
        };

        let response = self
            .client
            .get(download_url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, RAW_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        String::from_utf8(bytes.to_vec()).map_err(|_| fetch_error("content is not valid UTF-8".to_string()))
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
