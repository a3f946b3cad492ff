// UI module for rendering the TUI.
// Contains the tab bar, the per-tab content views, and the status bar.

mod list;
mod tabs;
pub mod theme;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::content;
use crate::state::ConsoleLevel;

use theme::Theme;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = Theme::of(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, &theme, chunks[0]);
    draw_content(frame, app, &theme, chunks[1]);
    draw_status_bar(frame, app, &theme, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame, &theme);
    }
}

/// Draw the main content area based on the active tab.
fn draw_content(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    match app.active_tab {
        Tab::Home => draw_home_tab(frame, app, theme, area),
        Tab::Projects => draw_projects_tab(frame, app, theme, area),
        Tab::About => draw_about_tab(frame, theme, area),
        Tab::Blog => draw_blog_tab(frame, theme, area),
        Tab::Resume => draw_resume_tab(frame, theme, area),
        Tab::Console => draw_console_tab(frame, app, theme, area),
    }
}

/// Home: greeting plus the pinned showcase.
fn draw_home_tab(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let greeting = vec![
        Line::from(Span::styled(
            format!("Hi, I'm {}.", content::DISPLAY_NAME),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            content::TAGLINE,
            Style::default().fg(theme.text),
        )),
    ];
    let header = Paragraph::new(greeting)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    list::render_showcase(frame, &app.home.showcase, theme, chunks[1]);
}

/// Projects: selectable list on the left, detail pane on the right.
fn draw_projects_tab(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let selected = app.projects.selected_project().cloned();
    list::render_projects_list(frame, &mut app.projects, theme, chunks[0]);
    list::render_project_detail(frame, selected.as_ref(), theme, chunks[1]);
}

fn draw_about_tab(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    for paragraph in content::ABOUT {
        lines.push(Line::from(Span::styled(
            paragraph,
            Style::default().fg(theme.text),
        )));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "Skills",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        content::SKILLS.join(" · "),
        Style::default().fg(theme.info),
    )));

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" About "));
    frame.render_widget(text, area);
}

fn draw_blog_tab(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    for post in &content::BLOG_POSTS {
        lines.push(Line::from(Span::styled(
            post.title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", post.url),
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::raw(""));
    }

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Blog "));
    frame.render_widget(text, area);
}

fn draw_resume_tab(frame: &mut Frame, theme: &Theme, area: Rect) {
    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(content::TAGLINE, Style::default().fg(theme.text))),
        Line::raw(""),
        Line::from(Span::styled("Experience", heading)),
    ];

    for experience in &content::EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled(
                experience.position,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", experience.company),
                Style::default().fg(theme.dim),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", experience.summary),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled("Education", heading)));
    for education in &content::EDUCATION {
        lines.push(Line::from(vec![
            Span::styled(
                education.degree,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", education.school),
                Style::default().fg(theme.dim),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", education.summary),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled("Links", heading)));
    for link in &content::SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::styled(link.label, Style::default().fg(theme.text)),
            Span::styled(format!("  {}", link.url), Style::default().fg(theme.dim)),
        ]));
    }

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Resume "));
    frame.render_widget(text, area);
}

/// Console: the activity log with level-colored entries.
fn draw_console_tab(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    if app.console.messages.is_empty() {
        list::render_empty(frame, theme, area, "No activity yet");
        return;
    }

    let items: Vec<ListItem> = app
        .console
        .messages
        .iter()
        .map(|message| {
            let (tag, color) = match message.level {
                ConsoleLevel::Info => ("INFO ", theme.info),
                ConsoleLevel::Warn => ("WARN ", theme.warn),
                ConsoleLevel::Error => ("ERROR", theme.error),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", message.timestamp.format("%H:%M:%S")),
                    Style::default().fg(theme.dim),
                ),
                Span::styled(format!("{} ", tag), Style::default().fg(color)),
                Span::styled(message.message.clone(), Style::default().fg(theme.text)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Console "))
        .highlight_style(Style::default().bg(theme.highlight_bg));

    frame.render_stateful_widget(list_widget, area, &mut app.console.list_state);
}

/// Bottom line: key hints, sync state, rate limit, fallback notice.
fn draw_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        " Tab switch · j/k move · f filter · t theme · r refresh · ? help · q quit ",
        Style::default().fg(theme.dim),
    )];

    if app.syncing {
        spans.push(Span::styled("⟳ syncing ", Style::default().fg(theme.warn)));
    }

    if let Some(notice) = app.notice() {
        spans.push(Span::styled(
            format!("· {} ", notice),
            Style::default().fg(theme.warn),
        ));
    }

    if let Some(rate_limit) = &app.rate_limit {
        if rate_limit.limit > 0 {
            spans.push(Span::styled(
                format!("· API {}/{} ", rate_limit.remaining, rate_limit.limit),
                Style::default().fg(theme.dim),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered help overlay listing the key bindings.
fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(44, 12, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Tab / Shift-Tab   switch tab"),
        Line::raw("j / k, arrows     move selection"),
        Line::raw("f                 toggle All/Featured"),
        Line::raw("t                 toggle dark/light theme"),
        Line::raw("r                 refresh live data"),
        Line::raw("q                 quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(theme.dim),
        )),
    ];

    let help = Paragraph::new(lines)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        );
    frame.render_widget(help, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
