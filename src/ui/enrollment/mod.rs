//! Enrollment wizard screen

mod step_fields;
mod step_indicator;

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::time::Instant;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(step_indicator::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    step_indicator::draw(frame, chunks[0], app, now);

    let step = app.state.wizard.current_step();
    let block = Block::default()
        .title(format!(" {} {} ", step.descriptor().icon, step.descriptor().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);
    step_fields::draw(frame, inner, app);

    draw_navigation(frame, chunks[2], app);
}

fn draw_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.wizard.current_step();
    let busy = app.state.wizard.is_submission_in_flight();

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(0),
            Constraint::Length(24),
        ])
        .split(area);

    render_button(
        frame,
        buttons[0],
        "◀ Sebelumnya",
        false,
        !step.is_first() && !busy,
    );
    let label = if step.is_last() {
        "Kirim Pendaftaran"
    } else {
        "Selanjutnya ▶"
    };
    render_button(frame, buttons[2], label, true, !busy);
}
