// State management module.
// Handles data loading, list selection, and the activity log for tabs.

#![allow(dead_code)]

pub mod console;
pub mod projects;

pub use console::{ConsoleLevel, ConsoleMessage, ConsoleTabState};
pub use projects::{HomeTabState, LoadingState, ProjectFilter, ProjectsTabState};
