//! Staff dashboard: user card and the role-gated menu

use crate::app::App;
use crate::state::menu_label;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    draw_menu(frame, chunks[0], app);
    draw_user_card(frame, chunks[1], app);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .permitted_routes()
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let is_selected = idx == app.state.dashboard_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{prefix}{}", menu_label(route)), style))
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_user_card(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = &app.state.session else {
        return;
    };
    let user = &session.user;
    let role = session.role();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", user.initials()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                &user.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(&user.email, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Peran: ", Style::default().fg(Color::DarkGray)),
            Span::styled(role.label(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            role.description(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Masuk sejak: ", Style::default().fg(Color::DarkGray)),
            Span::raw(session.started_at.format("%d-%m-%Y %H:%M UTC").to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} modul tersedia untuk peran ini", app.permitted_routes().len()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .title(" Selamat datang ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
