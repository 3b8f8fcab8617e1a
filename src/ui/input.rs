use crate::ui::app::App;
use crate::ui::search_box::SearchEdit;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.cycle_page_size();
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.next_page();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.previous_page();
        return;
    }

    match key.code {
        // Esc first clears the search, and only quits once it is empty.
        KeyCode::Esc => {
            if app.search_box().is_empty() {
                app.request_quit();
            } else {
                app.on_search_edit(SearchEdit::Clear);
            }
        }
        KeyCode::Tab => app.focus_next_header(),
        KeyCode::BackTab => app.focus_previous_header(),
        KeyCode::Enter => app.sort_by_focused_header(),
        KeyCode::PageDown => app.next_page(),
        KeyCode::PageUp => app.previous_page(),
        KeyCode::Home => app.first_page(),
        KeyCode::End => app.last_page(),
        KeyCode::Left => app.on_search_edit(SearchEdit::Left),
        KeyCode::Right => app.on_search_edit(SearchEdit::Right),
        KeyCode::Backspace => app.on_search_edit(SearchEdit::Backspace),
        KeyCode::Delete => app.on_search_edit(SearchEdit::Delete),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.on_search_edit(SearchEdit::Insert(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
