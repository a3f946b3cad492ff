// GitHub API endpoint functions.
// Provides typed methods for fetching portfolio data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{ReadmeFile, Repository};

/// One page covers a personal account; the provider caps per_page at 100.
pub const REPOS_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get a user's public repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let per_page = REPOS_PER_PAGE.to_string();
        let params = [("sort", "updated"), ("per_page", per_page.as_str())];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get a repository's README resource (content arrives base64-encoded).
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Result<ReadmeFile> {
        let response = self
            .get(&format!("/repos/{}/{}/readme", owner, repo))
            .await?;
        let readme: ReadmeFile = response.json().await?;
        Ok(readme)
    }
}
