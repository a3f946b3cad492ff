// Tab bar rendering with badge support for the Console tab.
// Handles visual indication of the active tab and unread error count.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

use super::theme::Theme;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let title = if *tab == Tab::Console && app.console.unread_errors > 0 {
                format!("{} ({})", tab.title(), app.console.unread_errors)
            } else {
                tab.title().to_string()
            };

            let style = if *tab == app.active_tab {
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD)
            } else if *tab == Tab::Console && app.console.unread_errors > 0 {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.text)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = Tab::ALL
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.dim))
                .title(" gitfolio ")
                .title_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(theme.title))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
