//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SCHOOL_NAME: &str = "SMA Nusantara";

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the school name, view title and signed-in user
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let left = Line::from(vec![
        Span::styled(
            format!(" {SCHOOL_NAME} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.state.current_view.title()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(left).style(Style::default().bg(Color::Black)),
        area,
    );

    if let Some(session) = &app.state.session {
        let user = Line::from(vec![
            Span::styled(&session.user.name, Style::default().fg(Color::White)),
            Span::styled(
                format!(" ({}) ", session.role().label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(user).alignment(Alignment::Right), area);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:keluar ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Home => "j/k:pilih  Enter:buka  d:daftar  l:login  q:keluar",
        View::Enrollment if app.state.wizard.state().dialog_open => {
            "←→:pilih  Enter:konfirmasi  y/n  Esc:batal"
        }
        View::Enrollment if app.state.is_file_field_active() => {
            "ketik path  Enter:lampirkan  ⌫:lepas  Tab:field  PgDn/PgUp:langkah  ^S:kirim"
        }
        View::Enrollment => "Tab:field  ←→/Spasi:pilih  PgDn:lanjut  PgUp:kembali  ^S:kirim  Esc:beranda",
        View::Login => "Tab:field  ←→:peran  Enter:masuk  Esc:kembali",
        View::Dashboard => "j/k:menu  Enter:buka  o:logout",
    }
}
