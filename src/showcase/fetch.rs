// Repository list fetching.
// One cached call per username; failures are reported to the console and
// absorbed into an empty list so the UI can fall back to static content.

use crate::cache::ShowcaseCache;
use crate::github::{GitHubClient, Repository};
use crate::worker::Reporter;

/// Return the user's repositories, from cache when an unexpired entry
/// exists. Only successful fetches are cached; a failed call leaves the
/// cache untouched so a later refresh can retry.
pub async fn cached_repositories(
    client: &GitHubClient,
    cache: &mut ShowcaseCache,
    reporter: &Reporter,
    username: &str,
) -> Vec<Repository> {
    if let Some(repos) = cache.repositories.get(username) {
        return repos.clone();
    }

    match client.get_user_repos(username).await {
        Ok(repos) => {
            reporter.info(format!(
                "fetched {} repositories for {}",
                repos.len(),
                username
            ));
            cache.repositories.insert(username.to_string(), repos.clone());
            repos
        }
        Err(e) => {
            reporter.error(format!("repository fetch for {} failed: {}", username, e));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::Reporter;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str) -> Repository {
        Repository {
            id: 7,
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

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let client = GitHubClient::new(None).unwrap();
        let mut cache = ShowcaseCache::default();
        let (reporter, _rx) = Reporter::detached();

        // Seed as if a first call had succeeded; the lookup must return it
        // without going anywhere near the network.
        cache
            .repositories
            .insert("user".to_string(), vec![repo("cached")]);

        let repos = cached_repositories(&client, &mut cache, &reporter, "user").await;
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "cached");
    }
}
