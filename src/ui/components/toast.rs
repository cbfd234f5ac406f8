//! Success toast shown in the top-right corner after a registration is accepted

use crate::state::enrollment::SubmissionReceipt;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 10;

/// Render the toast; `elapsed` is the fraction of the auto-dismiss delay already spent
pub fn render_success_toast(frame: &mut Frame, receipt: &SubmissionReceipt, elapsed: f64) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y + 1.min(area.height - height),
        width,
        height,
    };
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let content = vec![
        Line::from(Span::styled(
            "✔ Pendaftaran Berhasil!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Formulir pendaftaran Anda telah berhasil dikirim. Kami akan menghubungi Anda \
             melalui email/telepon untuk informasi lebih lanjut.",
        ),
        Line::from(vec![
            Span::styled("No. registrasi: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                receipt.short_code(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let text_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        text_area,
    );

    if inner.height > 0 {
        let bar_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let remaining = (1.0 - elapsed).clamp(0.0, 1.0);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
                .ratio(remaining)
                .label(Span::styled(
                    "Esc untuk menutup",
                    Style::default().fg(Color::DarkGray),
                )),
            bar_area,
        );
    }
}
