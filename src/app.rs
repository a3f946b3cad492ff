// App state and main event loop.
// Manages tabs, theme, keyboard input, and events arriving from the
// background worker.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::github::RateLimit;
use crate::prefs::{self, Preferences, ThemeMode};
use crate::state::{ConsoleTabState, HomeTabState, ProjectsTabState};
use crate::ui;
use crate::worker::{AppEvent, Command};

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Projects,
    About,
    Blog,
    Resume,
    Console,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Projects,
        Tab::About,
        Tab::Blog,
        Tab::Resume,
        Tab::Console,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
            Tab::About => "About",
            Tab::Blog => "Blog",
            Tab::Resume => "Resume",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::Projects,
            Tab::Projects => Tab::About,
            Tab::About => Tab::Blog,
            Tab::Blog => Tab::Resume,
            Tab::Resume => Tab::Console,
            Tab::Console => Tab::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Home => Tab::Console,
            Tab::Projects => Tab::Home,
            Tab::About => Tab::Projects,
            Tab::Blog => Tab::About,
            Tab::Resume => Tab::Blog,
            Tab::Console => Tab::Resume,
        }
    }
}

/// Main application state.
pub struct App {
    pub active_tab: Tab,
    pub theme: ThemeMode,
    /// Where the theme preference is persisted; None when no config
    /// directory could be resolved.
    prefs_path: Option<PathBuf>,
    pub home: HomeTabState,
    pub projects: ProjectsTabState,
    pub console: ConsoleTabState,
    pub rate_limit: Option<RateLimit>,
    pub syncing: bool,
    pub show_help: bool,
    pub should_quit: bool,
    commands: UnboundedSender<Command>,
}

impl App {
    pub fn new(
        preferences: Preferences,
        prefs_path: Option<PathBuf>,
        commands: UnboundedSender<Command>,
    ) -> Self {
        Self {
            active_tab: Tab::default(),
            theme: preferences.theme,
            prefs_path,
            home: HomeTabState::new(),
            projects: ProjectsTabState::new(),
            console: ConsoleTabState::new(),
            rate_limit: None,
            syncing: true,
            show_help: false,
            should_quit: false,
            commands,
        }
    }

    /// Main event loop: drain worker events, draw, poll the keyboard.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        events: &mut UnboundedReceiver<AppEvent>,
    ) -> io::Result<()> {
        while !self.should_quit {
            while let Ok(event) = events.try_recv() {
                self.apply_event(event);
            }
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Status-bar notice; non-blocking by design.
    pub fn notice(&self) -> Option<&'static str> {
        if self.projects.fallback_active {
            Some("live data unavailable, showing built-in projects")
        } else {
            None
        }
    }

    /// Fold one worker event into the UI state.
    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Projects(projects) => self.projects.apply_live(projects),
            AppEvent::Pinned(pinned) => self.home.set_pinned(pinned),
            AppEvent::Console(message) => {
                let viewing = self.active_tab == Tab::Console;
                self.console.push(message, viewing);
            }
            AppEvent::RateLimit(rate_limit) => self.rate_limit = Some(rate_limit),
            AppEvent::SyncFinished => self.syncing = false,
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            // Any key dismisses the overlay
            self.show_help = false;
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            KeyCode::Char('f') if self.active_tab == Tab::Projects => {
                self.projects.toggle_filter();
            }
            KeyCode::Down | KeyCode::Char('j') => match self.active_tab {
                Tab::Projects => self.projects.select_next(),
                Tab::Console => self.console.select_next(),
                _ => {}
            },
            KeyCode::Up | KeyCode::Char('k') => match self.active_tab {
                Tab::Projects => self.projects.select_prev(),
                Tab::Console => self.console.select_prev(),
                _ => {}
            },
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab == Tab::Console {
            self.console.mark_viewed();
        }
    }

    /// Flip the theme and persist it; persistence failures only warn.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Some(path) = &self.prefs_path {
            if let Err(e) = prefs::store(path, &Preferences { theme: self.theme }) {
                let message = crate::state::ConsoleMessage::warn(format!(
                    "could not save theme preference: {}",
                    e
                ));
                self.console.push(message, self.active_tab == Tab::Console);
            }
        }
    }

    fn request_refresh(&mut self) {
        if self.syncing {
            return;
        }
        self.syncing = true;
        let _ = self.commands.send(Command::Refresh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_is_closed() {
        let mut tab = Tab::Home;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);

        for _ in 0..Tab::ALL.len() {
            tab = tab.prev();
        }
        assert_eq!(tab, Tab::Home);
    }
}
