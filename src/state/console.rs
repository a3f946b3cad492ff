// Console tab state management.
// The activity log: every pipeline info/warning/error lands here instead of
// stdout, which the terminal UI owns.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete state for the Console tab.
#[derive(Debug, Default)]
pub struct ConsoleTabState {
    pub messages: Vec<ConsoleMessage>,
    pub list_state: ListState,
    /// Errors not yet seen (for the tab badge).
    pub unread_errors: usize,
}

impl ConsoleTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and keep the view pinned to the newest entry.
    pub fn push(&mut self, message: ConsoleMessage, viewing: bool) {
        if message.level == ConsoleLevel::Error && !viewing {
            self.unread_errors += 1;
        }
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    /// Clear the badge once the console is in view.
    pub fn mark_viewed(&mut self) {
        self.unread_errors = 0;
    }

    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.messages.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_to_bottom(&mut self) {
        if !self.messages.is_empty() {
            self.list_state.select(Some(self.messages.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_badge_counts_errors_only_while_away() {
        let mut console = ConsoleTabState::new();
        console.push(ConsoleMessage::info("fetched"), false);
        console.push(ConsoleMessage::error("boom"), false);
        console.push(ConsoleMessage::error("boom again"), true);

        assert_eq!(console.unread_errors, 1);

        console.mark_viewed();
        assert_eq!(console.unread_errors, 0);
    }
}
