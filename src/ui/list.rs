// Project list and detail rendering.
// Styled list views with loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::showcase::Project;
use crate::state::{LoadingState, ProjectsTabState};

use super::theme::Theme;

/// Render the selectable project list for the Projects tab.
pub fn render_projects_list(
    frame: &mut Frame,
    state: &mut ProjectsTabState,
    theme: &Theme,
    area: Rect,
) {
    let title = format!(" Projects · {} ", state.filter.label());

    match &state.data {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, theme, area, "Loading projects");
        }
        LoadingState::Error(e) => render_error(frame, theme, area, e),
        LoadingState::Loaded(_) => {
            let visible = state.visible();
            if visible.is_empty() {
                render_empty(frame, theme, area, "No projects found");
                return;
            }

            let items: Vec<ListItem> = visible
                .iter()
                .map(|project| project_line(project, theme))
                .collect();

            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut state.list_state);
        }
    }
}

/// Render the detail pane for the selected project.
pub fn render_project_detail(
    frame: &mut Frame,
    project: Option<&Project>,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let Some(project) = project else {
        let text = Paragraph::new("Select a project")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim))
            .block(block);
        frame.render_widget(text, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    lines.push(Line::from(Span::styled(
        project.description.clone(),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::raw(""));

    if !project.technologies.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tech: ", Style::default().fg(theme.dim)),
            Span::styled(
                project.technologies.join(", "),
                Style::default().fg(theme.info),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Source: ", Style::default().fg(theme.dim)),
        Span::styled(project.source_url.clone(), Style::default().fg(theme.accent)),
    ]));

    if let Some(demo) = &project.demo_url {
        lines.push(Line::from(vec![
            Span::styled("Demo: ", Style::default().fg(theme.dim)),
            Span::styled(demo.clone(), Style::default().fg(theme.accent)),
        ]));
    }

    if project.featured {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "★ Featured",
            Style::default().fg(theme.featured),
        )));
    }

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(text, area);
}

/// Render the Home tab showcase as a fixed card list.
pub fn render_showcase(frame: &mut Frame, projects: &[Project], theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Featured Projects ");

    if projects.is_empty() {
        let text = Paragraph::new("Loading showcase...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let mut lines = Vec::new();
    for project in projects {
        lines.push(project_spans(project, theme));
        lines.push(Line::from(Span::styled(
            format!("    {}", shorten(&project.description, 110)),
            Style::default().fg(theme.dim),
        )));
    }

    let text = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(text, area);
}

/// One summary line: star marker, title, technology hints.
fn project_spans<'a>(project: &Project, theme: &Theme) -> Line<'a> {
    let marker = if project.featured { "★ " } else { "  " };
    let tech = project
        .technologies
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(theme.featured)),
        Span::styled(project.title.clone(), Style::default().fg(theme.accent)),
        Span::styled(format!("  {}", tech), Style::default().fg(theme.dim)),
    ])
}

fn project_line<'a>(project: &Project, theme: &Theme) -> ListItem<'a> {
    ListItem::new(project_spans(project, theme))
}

fn shorten(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", text[..end].trim_end())
}

pub fn render_loading(frame: &mut Frame, theme: &Theme, area: Rect, message: &str) {
    let block = Block::default().borders(Borders::ALL);
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.warn))
        .block(block);
    frame.render_widget(text, area);
}

pub fn render_error(frame: &mut Frame, theme: &Theme, area: Rect, message: &str) {
    let block = Block::default().borders(Borders::ALL);
    let text = Paragraph::new(format!("❌ {}", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.error))
        .block(block);
    frame.render_widget(text, area);
}

pub fn render_empty(frame: &mut Frame, theme: &Theme, area: Rect, message: &str) {
    let block = Block::default().borders(Borders::ALL);
    let text = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim))
        .block(block);
    frame.render_widget(text, area);
}
