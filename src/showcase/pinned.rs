// Pinned repository selection.
// The landing-page showcase is editorially curated: a fixed allow-list of
// repository names, intersected against the fetched set in allow-list order.

use crate::cache::ShowcaseCache;
use crate::github::{GitHubClient, Repository};
use crate::worker::Reporter;

use super::fetch::cached_repositories;

/// Names highlighted on the Home tab, in display order.
pub const PINNED_REPOSITORIES: [&str; 6] = [
    "SqlAI",
    "realtor-agent",
    "ai_research_assistant",
    "Grid-Localization-With-Bayes-Filter",
    "CyberSageAI",
    "Neo4jAI",
];

/// Suffix keeping the pinned selection apart from the full list in cache.
const PINNED_KEY_SUFFIX: &str = "#pinned";

/// Fetch the pinned subset for a user, reusing the repository fetcher and
/// its cache. Allow-listed names missing from the fetched set are silently
/// dropped; an empty intersection is not an error.
pub async fn pinned_repositories(
    client: &GitHubClient,
    cache: &mut ShowcaseCache,
    reporter: &Reporter,
    username: &str,
) -> Vec<Repository> {
    let key = format!("{}{}", username, PINNED_KEY_SUFFIX);
    if let Some(pinned) = cache.repositories.get(&key) {
        return pinned.clone();
    }

    let all = cached_repositories(client, cache, reporter, username).await;
    if all.is_empty() {
        // The underlying fetch failed or the account is empty; do not pin
        // that outcome, a later refresh may do better.
        return Vec::new();
    }

    let pinned = select_pinned(&all);
    reporter.info(format!(
        "pinned {} of {} showcased repositories",
        pinned.len(),
        PINNED_REPOSITORIES.len()
    ));
    cache.repositories.insert(key, pinned.clone());
    pinned
}

/// Intersect the fetched set against the allow-list, preserving allow-list
/// order.
pub fn select_pinned(repos: &[Repository]) -> Vec<Repository> {
    PINNED_REPOSITORIES
        .iter()
        .filter_map(|name| repos.iter().find(|repo| repo.name == *name).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::Reporter;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str) -> Repository {
        Repository {
            id: 3,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/user/{}", name),
            homepage: None,
            language: None,
            topics: Vec::new(),
            updated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            stargazers_count: 0,
            fork: false,
        }
    }

    #[test]
    fn test_partial_intersection_keeps_allow_list_order() {
        // Fetched set holds 4 of the 6 allow-listed names, shuffled in
        // amongst others.
        let fetched = vec![
            repo("unrelated"),
            repo("Neo4jAI"),
            repo("ai_research_assistant"),
            repo("another"),
            repo("SqlAI"),
            repo("CyberSageAI"),
        ];

        let pinned = select_pinned(&fetched);
        let names: Vec<&str> = pinned.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["SqlAI", "ai_research_assistant", "CyberSageAI", "Neo4jAI"]
        );
    }

    #[test]
    fn test_empty_intersection_is_not_an_error() {
        let fetched = vec![repo("misc"), repo("other")];
        assert!(select_pinned(&fetched).is_empty());
    }

    #[tokio::test]
    async fn test_pinned_selection_is_cached_under_its_own_key() {
        let client = GitHubClient::new(None).unwrap();
        let mut cache = ShowcaseCache::default();
        let (reporter, _rx) = Reporter::detached();

        cache
            .repositories
            .insert("user#pinned".to_string(), vec![repo("SqlAI")]);

        let pinned = pinned_repositories(&client, &mut cache, &reporter, "user").await;
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].name, "SqlAI");
    }
}
