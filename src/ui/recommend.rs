use crate::app::{App, FetchState, View};
use crate::view::RecommendationCard;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: tabs(3) + input(3) + cards(min) + status(1)
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

    match app.view {
        View::ByUser => {
            super::render_input(
                app,
                frame,
                chunks[1],
                " Recommend for a User ",
                " 👤 User ID (Enter to submit, Esc to cancel): ",
                " 👤 User ID (/): ",
                &app.user_id,
            );
            render_cards(frame, chunks[2], &app.user_recs, app.user_scroll);
        }
        _ => {
            super::render_input(
                app,
                frame,
                chunks[1],
                " Recommend by Movie ",
                " 🎬 Movie title (Enter to submit, Esc to cancel): ",
                " 🎬 Movie title (/): ",
                &app.movie_title,
            );
            render_cards(frame, chunks[2], &app.movie_recs, app.movie_scroll);
        }
    }

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " /",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Edit  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Submit  "),
        Span::styled(
            "↑↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Scroll  "),
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

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    state: &FetchState<RecommendationCard>,
    scroll: u16,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recommendations ");

    match state {
        FetchState::Idle => {
            let hint = Paragraph::new("\n  Press / to fill in the form, then Enter to submit.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
        }
        FetchState::Loading => {
            let loading = Paragraph::new("\n  Fetching recommendations…")
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
        FetchState::Loaded(cards) => {
            let mut lines: Vec<Line> = Vec::new();
            for card in cards {
                lines.push(Line::from(Span::styled(
                    card.title.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                if !card.poster_path.is_empty() {
                    lines.push(Line::from(Span::styled(
                        card.poster_path.as_str(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.push(Line::from(Span::raw(card.overview.as_str())));
                lines.push(Line::from(Span::styled(
                    card.score.as_str(),
                    Style::default().fg(Color::Yellow),
                )));
                lines.push(Line::from(""));
            }

            let count_info = format!(" {} recommendations  scroll: {} ", cards.len(), scroll);

            let content = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(block.title_bottom(Line::from(count_info).alignment(Alignment::Right)));
            frame.render_widget(content, area);
        }
    }
}
