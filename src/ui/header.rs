use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    model: &'a str,
    file_name: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(model: &'a str, file_name: Option<&'a str>) -> Self {
        Self { model, file_name }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "AI Study Assistant",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.model.to_string(), text_style),
        ];
        if let Some(file_name) = self.file_name {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                file_name.to_string(),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
