use crate::ui::alert::state::AlertState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ALERT_BORDER, HEADER_TEXT, TEA_AMBER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MIN_WIDTH: u16 = 30;

pub fn render_alert(frame: &mut Frame, area: Rect, state: &AlertState) {
    let Some(message) = state.message() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(TEA_AMBER)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(6).max(MIN_WIDTH);
    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Alert ", Style::default().fg(TEA_AMBER)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ALERT_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
