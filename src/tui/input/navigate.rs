use crossterm::event::{KeyCode, KeyEvent};

use crate::model::SortKey;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to_start(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to_end(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_focus(),

        // Task operations
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // Sorting
        KeyCode::Char('n') => app.select_sort(SortKey::Name),
        KeyCode::Char('D') => app.select_sort(SortKey::Date),
        KeyCode::Char('p') => app.select_sort(SortKey::Priority),

        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}
