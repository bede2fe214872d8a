use crate::app::App;
use crate::view::truncate_str;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Detail modal, rendered over whichever view requested it.
pub fn render(app: &App, frame: &mut Frame) {
    let detail = match &app.detail {
        Some(d) => d,
        None => return,
    };

    let area = super::centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", detail.title))
        .title_bottom(
            Line::from(" ↑↓ Similar  Enter Open  PgUp/PgDn Scroll  Esc Close ")
                .style(Style::default().fg(Color::DarkGray)),
        );
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    // Layout: metadata(4) + overview/cast(min) + similar(8)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(inner);

    // ── Metadata ──
    let meta_lines = vec![
        Line::from(vec![
            Span::styled(" Released: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.release_date.as_str(),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled("Rating: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.rating.as_str(), Style::default().fg(Color::Yellow)),
            Span::raw("   "),
            Span::styled("Runtime: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.runtime.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" Genres: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.genres.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Poster: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.poster_path.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];
    let meta = Paragraph::new(meta_lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(meta, chunks[0]);

    // ── Overview and cast ──
    let mut body_lines = vec![Line::from(Span::raw(detail.overview.as_str())), Line::from("")];
    body_lines.push(Line::from(Span::styled(
        "Cast",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for member in &detail.cast {
        body_lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                member.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" as "),
            Span::raw(member.character.as_str()),
            Span::styled(
                format!("  {}", member.photo),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let body = Paragraph::new(body_lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title_bottom(
                    Line::from(format!(" scroll: {} ", app.detail_scroll))
                        .alignment(Alignment::Right)
                        .style(Style::default().fg(Color::DarkGray)),
                ),
        );
    frame.render_widget(body, chunks[1]);

    // ── Similar movies ──
    let similar_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Similar Movies ");

    if detail.similar.is_empty() {
        let empty = Paragraph::new("  No similar movies.")
            .style(Style::default().fg(Color::DarkGray))
            .block(similar_block);
        frame.render_widget(empty, chunks[2]);
    } else {
        let items: Vec<ListItem> = detail
            .similar
            .iter()
            .map(|card| {
                let line = Line::from(vec![
                    Span::raw(truncate_str(
                        &card.title,
                        (chunks[2].width as usize).saturating_sub(40),
                    )),
                    Span::styled(
                        format!("  {}", card.rating),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        format!("  {}", truncate_str(&card.poster_path, 26)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list_widget = List::new(items)
            .block(similar_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(app.similar_selected));
        frame.render_stateful_widget(list_widget, chunks[2], &mut list_state);
    }
}
