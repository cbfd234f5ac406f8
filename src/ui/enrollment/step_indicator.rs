//! Step badges and the animated progress gauge

use crate::app::App;
use crate::state::enrollment::{progress_caption, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Badges, gauge and caption
pub const HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let current = app.state.wizard.current_step();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, Step::COUNT as u32); Step::COUNT])
        .split(rows[0]);
    for (step, cell) in Step::ALL.into_iter().zip(cells.iter()) {
        frame.render_widget(Paragraph::new(badge(step, current)), *cell);
    }

    let ratio = app.state.progress.value(now).clamp(0.0, 1.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0)),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            progress_caption(current),
            Style::default().fg(Color::Gray),
        )),
        rows[2],
    );
}

/// Completed steps get a check mark, the current one is highlighted
fn badge(step: Step, current: Step) -> Line<'static> {
    let descriptor = step.descriptor();
    if step.index() < current.index() {
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Span::styled(descriptor.label, Style::default().fg(Color::Green)),
        ])
    } else if step == current {
        Line::from(vec![
            Span::styled(
                format!("{} ", descriptor.icon),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                descriptor.label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("{} {}", descriptor.ordinal, descriptor.label),
            Style::default().fg(Color::DarkGray),
        ))
    }
}
