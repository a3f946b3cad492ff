// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub repository as returned by the user-repos listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub stargazers_count: u64,
    pub fork: bool,
}

/// README resource. The `content` field is base64 text, possibly wrapped
/// with newlines.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeFile {
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
