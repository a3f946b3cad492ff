// Background sync worker.
// Owns the GitHub client and the session cache, runs the showcase pipeline
// at startup and on refresh requests, and streams results and console
// messages back to the UI over a channel.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::cache::ShowcaseCache;
use crate::content;
use crate::github::{GitHubClient, RateLimit};
use crate::showcase::{self, PacingConfig, Project};
use crate::state::ConsoleMessage;

/// Events flowing from the worker to the UI loop.
pub enum AppEvent {
    Projects(Vec<Project>),
    Pinned(Vec<Project>),
    Console(ConsoleMessage),
    RateLimit(RateLimit),
    SyncFinished,
}

/// Requests flowing from the UI loop to the worker.
pub enum Command {
    Refresh,
}

/// Handle the pipeline uses to log into the Console tab.
#[derive(Clone)]
pub struct Reporter {
    events: UnboundedSender<AppEvent>,
}

impl Reporter {
    pub fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self { events }
    }

    /// Reporter wired to a fresh channel, for exercising the pipeline
    /// without a UI.
    #[cfg(test)]
    pub fn detached() -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn info(&self, message: impl Into<String>) {
        let _ = self.events.send(AppEvent::Console(ConsoleMessage::info(message)));
    }

    pub fn warn(&self, message: impl Into<String>) {
        let _ = self.events.send(AppEvent::Console(ConsoleMessage::warn(message)));
    }

    pub fn error(&self, message: impl Into<String>) {
        let _ = self.events.send(AppEvent::Console(ConsoleMessage::error(message)));
    }
}

/// Spawn the worker task. It syncs once immediately, then once per
/// received refresh command; inside the cache TTL a refresh is nearly
/// free.
pub fn spawn(
    events: UnboundedSender<AppEvent>,
    commands: UnboundedReceiver<Command>,
) -> JoinHandle<()> {
    tokio::spawn(run(events, commands))
}

async fn run(events: UnboundedSender<AppEvent>, mut commands: UnboundedReceiver<Command>) {
    let reporter = Reporter::new(events.clone());

    let client = match GitHubClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            // Without a client there is nothing to sync; the UI degrades
            // to the static fallback set.
            reporter.error(format!("GitHub client setup failed: {}", e));
            let _ = events.send(AppEvent::Projects(Vec::new()));
            let _ = events.send(AppEvent::Pinned(Vec::new()));
            let _ = events.send(AppEvent::SyncFinished);
            return;
        }
    };

    let mut cache = ShowcaseCache::default();
    let pacing = PacingConfig::default();

    sync_once(&client, &mut cache, &reporter, &events, &pacing).await;
    while let Some(Command::Refresh) = commands.recv().await {
        reporter.info("refreshing live data");
        sync_once(&client, &mut cache, &reporter, &events, &pacing).await;
    }
}

/// One full pipeline pass: repository list, project conversion, pinned
/// selection, rate limit snapshot.
async fn sync_once(
    client: &GitHubClient,
    cache: &mut ShowcaseCache,
    reporter: &Reporter,
    events: &UnboundedSender<AppEvent>,
    pacing: &PacingConfig,
) {
    let username = content::USERNAME;

    let repos = showcase::cached_repositories(client, cache, reporter, username).await;
    let projects =
        showcase::convert_to_projects(client, cache, reporter, username, &repos, pacing).await;
    let _ = events.send(AppEvent::Projects(projects));

    let pinned_repos = showcase::pinned_repositories(client, cache, reporter, username).await;
    let pinned =
        showcase::convert_to_projects(client, cache, reporter, username, &pinned_repos, pacing)
            .await;
    let _ = events.send(AppEvent::Pinned(pinned));

    let _ = events.send(AppEvent::RateLimit(client.rate_limit()));
    let _ = events.send(AppEvent::SyncFinished);
}
