// Projects and Home tab state management.
// Holds loaded project data, list selection, the All/Featured filter, and
// the fallback substitution policy.

use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::content;
use crate::showcase::Project;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Which projects the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn toggle(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Featured,
            ProjectFilter::Featured => ProjectFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
        }
    }
}

/// Complete state for the Projects tab.
#[derive(Debug)]
pub struct ProjectsTabState {
    pub data: LoadingState<Vec<Project>>,
    pub list_state: ListState,
    pub filter: ProjectFilter,
    /// True when the static substitute set is on display.
    pub fallback_active: bool,
}

impl Default for ProjectsTabState {
    fn default() -> Self {
        Self {
            data: LoadingState::Loading,
            list_state: ListState::default(),
            filter: ProjectFilter::default(),
            fallback_active: false,
        }
    }
}

impl ProjectsTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a finished live result. Zero usable records degrade to the
    /// static substitute set and raise the non-blocking notice.
    pub fn apply_live(&mut self, projects: Vec<Project>) {
        if projects.is_empty() {
            self.data = LoadingState::Loaded(content::fallback_projects());
            self.fallback_active = true;
        } else {
            self.data = LoadingState::Loaded(projects);
            self.fallback_active = false;
        }
        self.reset_selection();
    }

    /// Projects matching the active filter, in display order.
    pub fn visible(&self) -> Vec<&Project> {
        let Some(projects) = self.data.data() else {
            return Vec::new();
        };
        projects
            .iter()
            .filter(|project| match self.filter {
                ProjectFilter::All => true,
                ProjectFilter::Featured => project.featured,
            })
            .collect()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.list_state.selected()?;
        self.visible().get(index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.visible().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggle();
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        if self.visible().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }
}

/// Home tab showcase size.
const SHOWCASE_SIZE: usize = 6;

/// State for the Home tab's pinned showcase.
#[derive(Debug, Default)]
pub struct HomeTabState {
    pub showcase: Vec<Project>,
    pub loaded: bool,
}

impl HomeTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the live pinned projects. Duplicate titles collapse, and when
    /// fewer than six remain the static set tops the showcase up.
    pub fn set_pinned(&mut self, live: Vec<Project>) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut showcase: Vec<Project> = live
            .into_iter()
            .filter(|project| seen.insert(project.title.clone()))
            .take(SHOWCASE_SIZE)
            .collect();

        if showcase.len() < SHOWCASE_SIZE {
            for fallback in content::fallback_projects() {
                if showcase.len() >= SHOWCASE_SIZE {
                    break;
                }
                if !seen.insert(fallback.title.clone()) {
                    continue;
                }
                showcase.push(Project {
                    featured: true,
                    ..fallback
                });
            }
        }

        self.showcase = showcase;
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: bool) -> Project {
        Project {
            id: 9,
            title: title.to_string(),
            description: "A test project description.".to_string(),
            technologies: vec!["Rust".to_string()],
            source_url: format!("https://github.com/user/{}", title),
            demo_url: None,
            featured,
        }
    }

    #[test]
    fn test_empty_live_result_substitutes_fallback_set() {
        let mut state = ProjectsTabState::new();
        state.apply_live(Vec::new());

        assert!(state.fallback_active);
        let visible = state.visible();
        assert!(!visible.is_empty());
        assert_eq!(visible[0].title, "SqlAI");
    }

    #[test]
    fn test_live_result_clears_fallback() {
        let mut state = ProjectsTabState::new();
        state.apply_live(Vec::new());
        state.apply_live(vec![project("live", true)]);

        assert!(!state.fallback_active);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_featured_filter_narrows_visible_set() {
        let mut state = ProjectsTabState::new();
        state.apply_live(vec![
            project("starred", true),
            project("quiet", false),
        ]);

        state.toggle_filter();
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "starred");
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = ProjectsTabState::new();
        state.apply_live(vec![project("one", false), project("two", false)]);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.list_state.selected(), Some(1));

        state.select_prev();
        state.select_prev();
        state.select_prev();
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_showcase_supplements_to_six_without_duplicates() {
        let mut home = HomeTabState::new();
        home.set_pinned(vec![project("SqlAI", false), project("live-only", false)]);

        assert_eq!(home.showcase.len(), 6);
        assert_eq!(home.showcase[0].title, "SqlAI");
        assert_eq!(home.showcase[1].title, "live-only");

        let titles: HashSet<&str> = home.showcase.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn test_showcase_keeps_six_live_projects_as_is() {
        let mut home = HomeTabState::new();
        let live: Vec<Project> = (0..6).map(|i| project(&format!("p{}", i), false)).collect();
        home.set_pinned(live);

        assert_eq!(home.showcase.len(), 6);
        assert!(home.showcase.iter().all(|p| p.title.starts_with('p')));
    }
}
