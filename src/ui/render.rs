use crate::generation::ActionKind;
use crate::session::UploadStatus;
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, document_regions, layout_regions};
use crate::ui::results::{result_lines, SPINNER_FRAMES};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let file_name = app.session().document().map(|document| document.file_name());
    frame.render_widget(Header::new(app.model(), file_name).widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Upload => draw_upload(frame, app, body),
        Screen::Document => draw_document(frame, app, body),
    }
    frame.render_widget(Footer::new(app.screen()).widget(footer), footer);
}

fn draw_upload(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let area = centered_rect(70, 60, body);
    let text_style = Style::default().fg(HEADER_TEXT);
    let input = app.path_input();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Upload your document",
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Enter the path to a text-based PDF (max 20 MB) and press Enter.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(ACCENT)),
            Span::styled(input.text().to_string(), text_style),
        ]),
        Line::from(""),
    ];

    match app.session().upload_status() {
        UploadStatus::Idle => {}
        UploadStatus::Processing { file_name } => {
            let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(format!("Processing {}...", file_name), text_style),
            ]));
        }
        UploadStatus::Rejected { message } => {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    let block = Block::default()
        .title(Span::styled(" PDF ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    // Cursor sits on the input row: block border + 4 lines above, after "  > ".
    if !app.is_processing_upload() && area.height > 6 && area.width > 2 {
        let column = 5u16.saturating_add(input.cursor() as u16);
        let x = area.x + column.min(area.width.saturating_sub(2));
        frame.set_cursor_position((x, area.y + 5));
    }
}

fn draw_document(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (actions, notice, results) = document_regions(body);
    draw_action_bar(frame, app, actions);

    if let Some(message) = app.notice() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", message),
                Style::default().fg(STATUS_ERROR),
            )),
            notice,
        );
    }

    let title = app
        .session()
        .document()
        .map(|document| format!(" Ready to analyze: {} ", document.file_name()))
        .unwrap_or_default();
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let lines = result_lines(&app.result_view(), app.animation_tick());
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0));
    frame.render_widget(widget, results);
}

fn draw_action_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);
    let current = app.session().request().action();
    let busy = app.session().request().is_in_flight();

    for (index, (action, column)) in ActionKind::ALL.iter().zip(columns.iter()).enumerate() {
        let selected = current == Some(*action);
        let title_style = if busy && !selected {
            Style::default().fg(MUTED_TEXT)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        let mut block = Block::default()
            .title(Span::styled(
                format!(" {} {} ", index + 1, action.title()),
                title_style,
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        if selected {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        let description = Paragraph::new(Span::styled(
            action.description(),
            Style::default().fg(MUTED_TEXT),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(description, *column);
    }
}
