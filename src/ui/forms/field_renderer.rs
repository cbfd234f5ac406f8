//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one bordered input
pub const FIELD_HEIGHT: u16 = 3;

/// Rows taken by a bordered input showing `lines` lines of text
pub fn field_height(lines: usize) -> u16 {
    FIELD_HEIGHT + lines.saturating_sub(1) as u16
}

/// Draw a login form field, masking the value when the field asks for it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_field_with_value(
        frame,
        area,
        &field.label,
        &field.display_value(),
        is_active,
        None,
        None,
    );
}

/// Draw a field with a precomputed display value.
///
/// An inline error replaces the hint, which only shows while the field is focused.
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
    hint: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let (display_value, value_style) = if value.is_empty() && !is_active {
        ("(kosong)", Style::default().fg(Color::DarkGray))
    } else {
        (value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut lines: Vec<Line> = display_value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }
    let content = Paragraph::new(lines);

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    match (error, hint) {
        (Some(message), _) => {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            )));
        }
        (None, Some(hint)) if is_active => {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {hint} "),
                Style::default().fg(Color::DarkGray),
            )));
        }
        _ => {}
    }

    frame.render_widget(content.block(block), area);
}
