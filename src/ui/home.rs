//! Landing page with the school banner and the main menu

use super::layout::SCHOOL_NAME;
use crate::app::App;
use crate::state::HomeAction;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const STATS: [(&str, &str); 4] = [
    ("1,200+", "Siswa Aktif"),
    ("8,500+", "Lulusan"),
    ("200+", "Prestasi"),
    ("A", "Akreditasi"),
];

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),     // Top padding (flex)
            Constraint::Length(6),  // Banner
            Constraint::Length(4),  // Stats
            Constraint::Length(1),  // Spacer
            Constraint::Length(5),  // Menu
            Constraint::Min(0),     // Bottom padding (flex)
        ])
        .split(area);

    draw_banner(frame, chunks[1]);
    draw_stats(frame, chunks[2]);
    draw_menu(frame, chunks[4], app);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " ● Pendaftaran PPDB 2025/2026 Telah Dibuka ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            SCHOOL_NAME.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Membentuk Generasi Unggul, Berkarakter, dan Berprestasi",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Pendaftaran ditutup 30 Juni 2025",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_stats(frame: &mut Frame, area: Rect) {
    let width = (STATS.len() as u16 * 16).min(area.width);
    let row = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, STATS.len() as u32); STATS.len()])
        .split(row);

    for ((value, label), cell) in STATS.iter().zip(cells.iter()) {
        let content = vec![
            Line::from(Span::styled(
                *value,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(
            Paragraph::new(content)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                ),
            *cell,
        );
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected_home_action();
    let lines: Vec<Line> = HomeAction::ALL
        .iter()
        .map(|action| {
            let is_selected = *action == selected;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{prefix}{}", action.label()), style))
        })
        .collect();

    let width = 24.min(area.width);
    let menu_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    frame.render_widget(Paragraph::new(lines), menu_area);
}
