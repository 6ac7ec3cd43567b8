use crate::tui::app::{App, View};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SEARCH_PREFIX: &str = " @ ";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Validation message
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let view = app.view();

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, app, &view, chunks[1]);
    draw_validation(frame, app, chunks[2]);
    draw_body(frame, app, &view, chunks[3]);
    draw_status_bar(frame, app, &view, chunks[4]);

    if view == View::Search {
        // Border (1) + prefix
        let cursor_x = chunks[1]
            .x
            .saturating_add(1 + SEARCH_PREFIX.len() as u16)
            .saturating_add(app.input.display_offset(&app.search.search_query));
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " usersearch ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}", crate::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, view: &View, area: Rect) {
    let border_style = if app.search.is_input_error {
        Style::default().fg(Color::Red)
    } else if *view == View::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Username ");

    let search_text = format!("{}{}", SEARCH_PREFIX, app.search.search_query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_validation(frame: &mut Frame, app: &App, area: Rect) {
    if !app.search.is_input_error {
        return;
    }

    let line = Line::from(Span::styled(
        format!(" {}", app.search.input_error_message),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_body(frame: &mut Frame, app: &App, view: &View, area: Rect) {
    match view {
        View::Search => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Search ");
            let text = vec![
                Line::from("Enter a username without spaces and press Enter."),
                Line::from(""),
                Line::from(Span::styled(
                    "Enter submit   Esc clear/quit   Ctrl+C quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
                area,
            );
        }
        View::UserDetail {
            username,
            page,
            per_page,
        } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" User ");
            let label = Style::default().add_modifier(Modifier::BOLD);
            let text = vec![
                Line::from(vec![
                    Span::styled("Username: ", label),
                    Span::styled(username.clone(), Style::default().fg(Color::Yellow)),
                ]),
                Line::from(vec![Span::styled("Page:     ", label), Span::raw(page.clone())]),
                Line::from(vec![
                    Span::styled("Per page: ", label),
                    Span::raw(per_page.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Route:    ", label),
                    Span::styled(
                        app.search.navigator().current_url(),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc back   q quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, view: &View, area: Rect) {
    let location = match view {
        View::Search => "search".to_string(),
        View::UserDetail { .. } => app.search.navigator().current().path.clone(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", location),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(" "),
        Span::raw(app.status_message.clone()),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Rgb(40, 40, 50))),
        area,
    );
}
