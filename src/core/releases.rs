use crate::error::{HatchError, Result};
use serde::{Deserialize, Serialize};

pub const REPO_OWNER: &str = "skiff-dev";
pub const REPO_NAME: &str = "skiff-server";

const USER_AGENT: &str = concat!("hatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Release {
    pub tag_name: String,
    pub name: String,
    pub prerelease: bool,
    pub draft: bool,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
    pub size: u64,
}

/// Client for the GitHub release index of the Skiff server.
pub struct ReleaseClient {
    client: reqwest::Client,
    github_token: Option<String>,
}

impl ReleaseClient {
    pub fn new(github_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            github_token,
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("GITHUB_TOKEN").ok())
    }

    /// The underlying HTTP client, reused for asset downloads.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetches the published releases, newest first. Drafts are filtered
    /// out; prereleases are kept and flagged by the callers.
    pub async fn get_releases(&self) -> Result<Vec<Release>> {
        let url = format!("https://api.github.com/repos/{REPO_OWNER}/{REPO_NAME}/releases");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if let Some(token) = &self.github_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HatchError::fetch_failed(format!("release index: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HatchError::fetch_failed(format!(
                "release index returned {status}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| HatchError::fetch_failed(format!("release index: {e}")))?;
        let releases: Vec<Release> = serde_json::from_str(&text)
            .map_err(|e| HatchError::fetch_failed(format!("release index: {e}")))?;

        Ok(releases.into_iter().filter(|r| !r.draft).collect())
    }
}

pub fn server_binary_name() -> &'static str {
    if cfg!(windows) {
        "skiffd.exe"
    } else {
        "skiffd"
    }
}

pub fn companion_binary_name() -> &'static str {
    if cfg!(windows) {
        "skiffctl.exe"
    } else {
        "skiffctl"
    }
}

pub fn platform_suffix() -> String {
    let os = if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "unknown"
    };

    let arch = if cfg!(target_arch = "x86_64") {
        "x86_64"
    } else if cfg!(target_arch = "aarch64") {
        "aarch64"
    } else {
        "unknown"
    };

    format!("{os}-{arch}")
}

/// Picks the server binary asset for the current platform, falling back to
/// a universal asset and finally to any `skiffd`-prefixed asset.
pub fn find_server_asset(release: &Release) -> Option<&Asset> {
    find_binary_asset(release, "skiffd")
}

/// Picks the optional `skiffctl` admin CLI asset, if the release ships one.
pub fn find_companion_asset(release: &Release) -> Option<&Asset> {
    find_binary_asset(release, "skiffctl")
}

fn find_binary_asset<'a>(release: &'a Release, prefix: &str) -> Option<&'a Asset> {
    let suffix = platform_suffix().to_lowercase();

    release
        .assets
        .iter()
        .find(|asset| {
            let name = asset.name.to_lowercase();
            name.starts_with(prefix) && (name.contains(&suffix) || name.contains("universal"))
        })
        .or_else(|| {
            release
                .assets
                .iter()
                .find(|asset| asset.name.to_lowercase().starts_with(prefix))
        })
}
