mod browse;
mod detail;
mod help;
mod recommend;

use crate::app::{App, InputMode, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match app.view {
        View::Browse => browse::render(app, frame),
        View::ByMovie | View::ByUser => recommend::render(app, frame),
    }

    // The detail modal sits on top of whichever view opened it
    if app.detail.is_some() {
        detail::render(app, frame);
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

/// Tab strip shared by all three views.
pub(super) fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| {
            let style = if *v == app.view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(v.label(), style))
        })
        .collect();

    let index = View::ALL.iter().position(|v| *v == app.view).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(index)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Movie Explorer ")
                .title_bottom(Line::from(" [Tab/1-3] ").alignment(Alignment::Right)),
        )
        .highlight_style(Style::default().fg(Color::Cyan));
    frame.render_widget(tabs, area);
}

/// Single-line input box shared by the search bar and both forms.
pub(super) fn render_input(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    editing_label: &str,
    normal_label: &str,
    value: &str,
) {
    let style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };
    let label = if app.input_mode == InputMode::Editing {
        editing_label
    } else {
        normal_label
    };
    let text = format!("{}{}", label, value);
    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title),
    );
    frame.render_widget(input, area);

    // Set cursor position when editing
    if app.input_mode == InputMode::Editing {
        let cursor_x = area.x + label.len() as u16 + value.len() as u16;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Create a centered rectangle using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
