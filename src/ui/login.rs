//! Staff login screen

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, Role, LOGIN_EMAIL, LOGIN_PASSWORD};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 52;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;
    let active = form.active_field();

    let width = PANEL_WIDTH.min(area.width);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),                          // Title
            Constraint::Length(FIELD_HEIGHT),               // Email
            Constraint::Length(FIELD_HEIGHT),               // Password
            Constraint::Length(Role::ALL.len() as u16 + 2), // Role
            Constraint::Length(BUTTON_HEIGHT),              // Button
            Constraint::Min(0),
        ])
        .split(panel);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Masuk ke Portal Staf",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Gunakan akun sekolah Anda",
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        chunks[1],
    );

    for (index, area) in [(LOGIN_EMAIL, chunks[2]), (LOGIN_PASSWORD, chunks[3])] {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, area, field, active == index);
        }
    }
    draw_role_selector(frame, chunks[4], form.role, form.is_role_active());
    render_button(frame, chunks[5], "Masuk", form.is_button_active(), true);
}

fn draw_role_selector(frame: &mut Frame, area: Rect, selected: Role, is_active: bool) {
    let lines: Vec<Line> = Role::ALL
        .iter()
        .map(|role| {
            let is_selected = *role == selected;
            let marker = if is_selected { "◉ " } else { "○ " };
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(role.label(), label_style),
                Span::styled(
                    format!("  {}", role.description()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Masuk sebagai ")
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
