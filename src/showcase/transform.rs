// Project derivation.
// Filters and ranks repositories, resolves descriptions, and paces README
// lookups to stay under the unauthenticated rate limit.

use std::time::Duration;

use futures::future::join_all;

use crate::cache::ShowcaseCache;
use crate::github::{GitHubClient, Repository};
use crate::worker::Reporter;

use super::readme;

/// How many repositories the showcase keeps after ranking.
const MAX_PROJECTS: usize = 12;

/// Topics shown per project, after the primary language.
const MAX_TOPICS: usize = 4;

/// A display-ready portfolio project derived from a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub source_url: String,
    pub demo_url: Option<String>,
    pub featured: bool,
}

/// Admission control for per-repository README lookups: `concurrent` calls
/// per round, `pause` between rounds that hit the network.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    pub concurrent: usize,
    pub pause: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            concurrent: 4,
            pause: Duration::from_secs(1),
        }
    }
}

/// Convert repositories to display projects, preserving ranked order.
///
/// README lookups go through the cache; misses are fetched `concurrent` at
/// a time with a pause between fetching rounds.
pub async fn convert_to_projects(
    client: &GitHubClient,
    cache: &mut ShowcaseCache,
    reporter: &Reporter,
    username: &str,
    repos: &[Repository],
    pacing: &PacingConfig,
) -> Vec<Project> {
    let selected = select_repositories(repos.to_vec());
    let mut projects = Vec::with_capacity(selected.len());
    let mut fetched_last_round = false;

    for group in selected.chunks(pacing.concurrent.max(1)) {
        if fetched_last_round && !pacing.pause.is_zero() {
            tokio::time::sleep(pacing.pause).await;
        }

        let missing: Vec<&Repository> = group
            .iter()
            .filter(|repo| {
                cache
                    .readmes
                    .get(&readme::readme_key(username, &repo.name))
                    .is_none()
            })
            .collect();
        fetched_last_round = !missing.is_empty();

        let summaries = join_all(
            missing
                .iter()
                .map(|repo| readme::fetch_summary(client, reporter, username, &repo.name)),
        )
        .await;
        for (repo, summary) in missing.iter().zip(summaries) {
            cache
                .readmes
                .insert(readme::readme_key(username, &repo.name), summary);
        }

        for repo in group {
            let summary = cache
                .readmes
                .get(&readme::readme_key(username, &repo.name))
                .cloned()
                .flatten();
            projects.push(project_from(repo, summary));
        }
    }

    projects
}

/// Keep the repositories worth showing: no forks, no provider profile-page
/// site, ranked by stars then recency, capped at the showcase size.
pub fn select_repositories(mut repos: Vec<Repository>) -> Vec<Repository> {
    repos.retain(|repo| !repo.fork && !repo.name.contains(".github.io"));
    repos.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    repos.truncate(MAX_PROJECTS);
    repos
}

/// Derive one display project from a repository and its README extract.
pub fn project_from(repo: &Repository, summary: Option<String>) -> Project {
    let description = summary
        .filter(|text| !text.is_empty())
        .or_else(|| repo.description.clone().filter(|text| !text.is_empty()))
        .unwrap_or_else(|| placeholder_description(repo));

    let technologies: Vec<String> = repo
        .language
        .iter()
        .chain(repo.topics.iter().take(MAX_TOPICS))
        .filter(|tech| !tech.is_empty())
        .cloned()
        .collect();

    Project {
        id: repo.id,
        title: clean_repo_name(&repo.name),
        description,
        technologies,
        source_url: repo.html_url.clone(),
        demo_url: repo.homepage.clone().filter(|url| !url.is_empty()),
        featured: repo.stargazers_count > 0,
    }
}

/// Turn `ai_research-assistant` into `Ai Research Assistant`.
pub fn clean_repo_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut boundary = true;

    for c in name.chars() {
        if c == '-' || c == '_' || c == ' ' {
            cleaned.push(' ');
            boundary = true;
        } else if boundary {
            cleaned.extend(c.to_uppercase());
            boundary = false;
        } else {
            cleaned.push(c);
        }
    }

    cleaned
}

/// Stand-in description for repositories with no README extract and no
/// provider description. Template choice is a stable hash of the name, so
/// the same repository always reads the same.
fn placeholder_description(repo: &Repository) -> String {
    let title = clean_repo_name(&repo.name);
    let language = repo
        .language
        .clone()
        .unwrap_or_else(|| "modern technologies".to_string());

    let options = [
        format!("A project that explores {} concepts and applications.", title),
        format!("Software implementation built with {}.", language),
        format!("A solution designed for solving problems in {}.", title),
    ];
    let pick = stable_hash(&repo.name) as usize % options.len();
    options[pick].clone()
}

/// FNV-1a. The std hasher is not stable across releases, and the pick must
/// never change between sessions.
fn stable_hash(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::Reporter;
    use chrono::{DateTime, TimeZone, Utc};
    use std::time::Duration;

    fn repo(name: &str, stars: u64, fork: bool) -> Repository {
        Repository {
            id: 1,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/user/{}", name),
            homepage: None,
            language: Some("Rust".to_string()),
            topics: Vec::new(),
            updated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            stargazers_count: stars,
            fork,
        }
    }

    fn repo_updated(name: &str, stars: u64, updated_at: DateTime<Utc>) -> Repository {
        Repository {
            updated_at,
            ..repo(name, stars, false)
        }
    }

    #[test]
    fn test_forks_and_profile_site_are_excluded() {
        let repos = vec![
            repo("keeper", 3, false),
            repo("forked-tool", 50, true),
            repo("user.github.io", 10, false),
        ];

        let selected = select_repositories(repos);
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["keeper"]);
    }

    #[test]
    fn test_ranking_is_stars_then_recency() {
        let older = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let newer = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let repos = vec![
            repo_updated("stale-popular", 5, older),
            repo_updated("fresh-popular", 5, newer),
            repo_updated("fresh-quiet", 0, newer),
        ];

        let selected = select_repositories(repos);
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["fresh-popular", "stale-popular", "fresh-quiet"]);
    }

    #[test]
    fn test_showcase_is_capped() {
        let repos: Vec<Repository> = (0..20).map(|i| repo(&format!("repo{}", i), i, false)).collect();
        assert_eq!(select_repositories(repos).len(), MAX_PROJECTS);
    }

    #[test]
    fn test_technologies_bounded_and_non_empty() {
        let mut many_topics = repo("tagged", 1, false);
        many_topics.topics = vec![
            "cli".to_string(),
            String::new(),
            "tui".to_string(),
            "github".to_string(),
            "portfolio".to_string(),
            "extra".to_string(),
        ];

        let project = project_from(&many_topics, None);
        assert!(project.technologies.len() <= 5);
        assert!(project.technologies.iter().all(|tech| !tech.is_empty()));
        assert_eq!(project.technologies[0], "Rust");
    }

    #[test]
    fn test_featured_tracks_star_count() {
        assert!(project_from(&repo("starred", 1, false), None).featured);
        assert!(!project_from(&repo("quiet", 0, false), None).featured);
    }

    #[test]
    fn test_description_priority() {
        let mut described = repo("described", 0, false);
        described.description = Some("Provider description.".to_string());

        let from_readme = project_from(&described, Some("Extract wins.".to_string()));
        assert_eq!(from_readme.description, "Extract wins.");

        let from_provider = project_from(&described, None);
        assert_eq!(from_provider.description, "Provider description.");

        // An empty provider description does not count as present
        described.description = Some(String::new());
        let placeholder = project_from(&described, None);
        assert!(!placeholder.description.is_empty());
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let bare = repo("bare-repo", 0, false);
        let first = project_from(&bare, None).description;
        let second = project_from(&bare, None).description;
        assert_eq!(first, second);
    }

    #[test]
    fn test_clean_repo_name() {
        assert_eq!(clean_repo_name("ai_research_assistant"), "Ai Research Assistant");
        assert_eq!(clean_repo_name("realtor-agent"), "Realtor Agent");
        assert_eq!(clean_repo_name("SqlAI"), "SqlAI");
    }

    #[tokio::test]
    async fn test_convert_serves_cached_extracts_without_network() {
        let client = GitHubClient::new(None).unwrap();
        let mut cache = ShowcaseCache::default();
        let (reporter, _rx) = Reporter::detached();

        let repos = vec![repo("first", 2, false), repo("second", 1, false)];
        for r in &repos {
            cache.readmes.insert(
                readme::readme_key("user", &r.name),
                Some(format!("Summary for {}.", r.name)),
            );
        }

        let pacing = PacingConfig {
            concurrent: 4,
            pause: Duration::ZERO,
        };
        let projects =
            convert_to_projects(&client, &mut cache, &reporter, "user", &repos, &pacing).await;

        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(projects[0].description, "Summary for first.");
        assert_eq!(projects[1].description, "Summary for second.");
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let client = GitHubClient::new(None).unwrap();
        let mut cache = ShowcaseCache::default();
        let (reporter, _rx) = Reporter::detached();

        let projects = convert_to_projects(
            &client,
            &mut cache,
            &reporter,
            "user",
            &[],
            &PacingConfig::default(),
        )
        .await;
        assert!(projects.is_empty());
    }
}
