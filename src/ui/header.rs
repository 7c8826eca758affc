use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, IMPURE_RED, TEA_AMBER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    strict_mode: bool,
    render_passes: usize,
}

impl Header {
    pub fn new(strict_mode: bool, render_passes: usize) -> Self {
        Self {
            strict_mode,
            render_passes,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  🍵  ", text_style),
            Span::styled(
                "Keeping Components Pure",
                Style::default().fg(TEA_AMBER).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("render passes: {}", self.render_passes), text_style),
        ];
        if self.strict_mode {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("strict mode", Style::default().fg(IMPURE_RED)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
