use crate::app::{App, FetchState};
use crate::view::{release_year, truncate_str};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: tabs(3) + search(3) + results(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    super::render_tabs(app, frame, chunks[0]);

    super::render_input(
        app,
        frame,
        chunks[1],
        " Find Movies ",
        " 🔍 Search (Enter to submit, Esc to cancel): ",
        " 🔍 Search (/): ",
        &app.query,
    );

    render_results(app, frame, chunks[2]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " ↑↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Navigate  "),
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Search  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Details  "),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Views  "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    let status_bar = Paragraph::new(status_line);
    frame.render_widget(status_bar, chunks[3]);
}

fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Results ");

    match &app.search {
        FetchState::Idle => {
            let hint = Paragraph::new("\n  Press / and type a movie title to search.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
        }
        FetchState::Loading => {
            let loading = Paragraph::new("\n  Searching…")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        FetchState::Failed(msg) => {
            let error = Paragraph::new(format!("\n  {}", msg))
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Error "),
                );
            frame.render_widget(error, area);
        }
        FetchState::Loaded(movies) => {
            let items: Vec<ListItem> = movies
                .iter()
                .map(|movie| {
                    let title = match movie.release_date.as_deref().and_then(release_year) {
                        Some(year) => format!("{} ({})", movie.title, year),
                        None => movie.title.clone(),
                    };
                    let line = Line::from(vec![
                        Span::styled(
                            format!("{:>8} ", movie.id),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(truncate_str(
                            &title,
                            (area.width as usize).saturating_sub(24),
                        )),
                        Span::styled(
                            format!("  ⭐ {}", movie.vote_average),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]);
                    ListItem::new(line)
                })
                .collect();

            let count_info = format!(" {} movies ", movies.len());

            let list_widget = List::new(items)
                .block(
                    block.title_bottom(Line::from(count_info).alignment(Alignment::Right)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");

            let mut list_state = ListState::default();
            list_state.select(Some(app.browse_selected));
            frame.render_stateful_widget(list_widget, area, &mut list_state);
        }
    }
}
