// API client module: contains a small blocking HTTP client that talks to
// the GitHub REST API. It is intentionally small and synchronous — the
// program performs exactly one upload per invocation, so nothing here
// needs to be async or retried.

use anyhow::{Context, Result};
use reqwest::blocking::{Body, Client};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

const API_ROOT: &str = "https://api.github.com";

/// Name of the environment variable holding the access token.
pub const TOKEN_VAR: &str = "GH_REPO_TOKEN";

/// Simple API client that holds a reqwest blocking client and the access
/// token used for authenticated calls. The token lives in memory for the
/// process lifetime only; it is never logged or written anywhere.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: Client,
    token: String,
}

/// Repository metadata. Only the fields this program reads.
#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    pub full_name: String,
}

/// GitHub release metadata. The upload endpoint is the only thing the
/// upload step needs from the release object.
#[derive(Deserialize, Debug, Clone)]
pub struct Release {
    pub upload_url: String,
}

/// GitHub release asset.
#[derive(Deserialize, Debug, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl GithubClient {
    /// Create a client from the `GH_REPO_TOKEN` environment variable.
    /// An unset or empty variable is a fatal configuration error reported
    /// before any network call is made.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            anyhow::bail!("{} environment variable is not set", TOKEN_VAR);
        }
        Self::new(token)
    }

    /// Create a client with an explicit token.
    pub fn new(token: String) -> Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("ghup/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GithubClient { client, token })
    }

    /// Look up a repository by its `<owner>/<name>` identifier. Whether the
    /// identifier is valid is GitHub's call, not ours — a malformed or
    /// unknown slug comes back as an API error.
    pub fn get_repository(&self, slug: &str) -> Result<Repository> {
        let url = format!("{}/repos/{}", API_ROOT, slug);
        let res = self.client.get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .context("Failed to send repository lookup request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Repository lookup failed: {} - {}", status, txt);
        }
        let repo: Repository = res.json().context("Parsing repository json")?;
        Ok(repo)
    }

    /// Fetch the release tagged `tag` in `repo`. The release must already
    /// exist; this program never creates tags or releases.
    pub fn get_release_by_tag(&self, repo: &Repository, tag: &str) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/tags/{}", API_ROOT, repo.full_name, tag);
        let res = self.client.get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .context("Failed to send release lookup request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Release lookup failed: {} - {}", status, txt);
        }
        let release: Release = res.json().context("Parsing release json")?;
        Ok(release)
    }

    /// Upload the file at `path` as a binary asset of `release`, named
    /// after the file's basename. The bytes go to the release's own
    /// `upload_url` as `application/octet-stream`. If an asset with the
    /// same name already exists, GitHub rejects the upload (422) and that
    /// rejection surfaces here like any other API error.
    pub fn upload_asset(&self, release: &Release, path: &Path) -> Result<ReleaseAsset> {
        let name = asset_name(path)?;
        let file = File::open(path)
            .with_context(|| format!("Failed to open asset file {}", path.display()))?;
        let len = file.metadata()
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?
            .len();

        let url = asset_upload_url(&release.upload_url);
        let res = self.client.post(url)
            .query(&[("name", name)])
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(Body::sized(file, len))
            .send()
            .context("Failed to send upload request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Upload failed: {} - {}", status, txt);
        }
        let asset: ReleaseAsset = res.json().context("Parsing uploaded asset json")?;
        Ok(asset)
    }
}

/// The `upload_url` GitHub returns is a hypermedia template ending in
/// `{?name,label}`; strip the template suffix to get a plain URL.
fn asset_upload_url(upload_url: &str) -> &str {
    match upload_url.find('{') {
        Some(idx) => &upload_url[..idx],
        None => upload_url,
    }
}

/// Asset name sent to GitHub: the basename of the local file.
fn asset_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Asset path has no file name: {}", path.display()))
}
