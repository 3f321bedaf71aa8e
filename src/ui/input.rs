use crate::generation::ActionKind;
use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved per PgUp/PgDn.
const PAGE_SCROLL: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Upload => handle_upload_key(app, key),
        Screen::Document => handle_document_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.screen() == Screen::Upload {
        app.path_input_mut().insert_str(text);
    }
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => return app.request_quit(),
        KeyCode::Enter => return app.submit_path(),
        _ => {}
    }

    let input = app.path_input_mut();
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(ch),
        _ => {}
    }
}

fn handle_document_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Char('1') => app.select_action(ActionKind::Summary),
        KeyCode::Char('2') => app.select_action(ActionKind::Strategy),
        KeyCode::Char('3') => app.select_action(ActionKind::Quiz),
        KeyCode::Char('u') | KeyCode::Char('U') => app.reset(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry_quiz(),
        KeyCode::Char(ch @ 'a'..='d') => app.answer((ch as u8 - b'a') as usize),
        KeyCode::Up => app.focus_prev_question(),
        KeyCode::Down => app.focus_next_question(),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
