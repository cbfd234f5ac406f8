//! Confirmation dialog shown before the wizard changes step or submits

use super::base::{centered_rect, wrap_text};
use crate::state::enrollment::{DialogCopy, TransitionKind};
use crate::state::DialogButton;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 62;

fn accent(kind: TransitionKind) -> Color {
    match kind {
        TransitionKind::Advance => Color::Cyan,
        TransitionKind::Retreat => Color::Yellow,
        TransitionKind::Submit => Color::Green,
    }
}

/// Render the transition confirmation dialog with its two buttons
pub fn render_confirm_dialog(
    frame: &mut Frame,
    kind: TransitionKind,
    copy: &DialogCopy,
    selected: DialogButton,
) {
    let color = accent(kind);
    let text_width = DIALOG_WIDTH.saturating_sub(6) as usize;

    let mut content = vec![
        Line::from(Span::styled(
            copy.title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrap_text(copy.message, text_width).into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled(
            copy.step_title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", copy.step_caption),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    content.extend(
        wrap_text(copy.step_question, text_width)
            .into_iter()
            .map(Line::from),
    );
    content.extend(wrap_text(copy.note, text_width).into_iter().map(|line| {
        Line::from(Span::styled(line, Style::default().fg(Color::Gray)))
    }));
    if let Some(warning) = copy.warning {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("⚠ {warning}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(footer) = copy.footer {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("ⓘ {footer}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let hint = Line::from(vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" pilih  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" konfirmasi  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" batal", Style::default().fg(Color::DarkGray)),
    ]);

    // content + blank + buttons + hint + borders
    let height = content.len() as u16 + 1 + BUTTON_HEIGHT + 1 + 2;
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        });

    frame.render_widget(
        Paragraph::new(content).style(Style::new().bg(Color::Black).fg(Color::White)),
        chunks[0],
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_button(
        frame,
        buttons[0],
        copy.cancel_label,
        selected == DialogButton::Cancel,
        !copy.loading,
    );
    render_button(
        frame,
        buttons[1],
        copy.confirm_label,
        selected == DialogButton::Confirm,
        !copy.loading,
    );

    frame.render_widget(Paragraph::new(hint), chunks[2]);
}
