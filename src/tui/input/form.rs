use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{next_priority, prev_priority};
use crate::tui::app::{App, FormField};
use crate::util::unicode;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab => form.field = form.field.next(),
        KeyCode::BackTab => form.field = form.field.prev(),
        _ => match form.field {
            FormField::Text => edit_line(&mut form.text, key),
            FormField::Date => edit_line(&mut form.date, key),
            FormField::Priority => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    form.priority = prev_priority(&form.priority).to_string();
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    form.priority = next_priority(&form.priority).to_string();
                }
                KeyCode::Backspace | KeyCode::Delete => form.priority.clear(),
                _ => {}
            },
        },
    }
}

/// Append-only single line editing
fn edit_line(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => buffer.clear(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            buffer.push(c);
        }
        KeyCode::Backspace => {
            unicode::pop_grapheme(buffer);
        }
        _ => {}
    }
}
