use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.palette.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &app.message {
        spans.push(Span::styled(
            format!(" {message}"),
            Style::default().fg(app.palette.text).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hint(app);
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.palette.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hint(app: &App) -> &'static str {
    match (app.mode, app.focus) {
        (Mode::Form, _) => "Tab field  Enter save  Esc cancel ",
        (Mode::Navigate, Focus::Completed) => "d delete  Tab tasks  ? help ",
        (Mode::Navigate, Focus::Tasks) => "a add  e edit  space done  d delete  ? help ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render_row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn navigate_hints() {
        let app = app_with_tasks(&[]);
        assert!(render_row(&app).ends_with("a add  e edit  space done  d delete  ? help"));
    }

    #[test]
    fn form_hints() {
        let mut app = app_with_tasks(&[]);
        app.open_add_form();
        assert!(render_row(&app).ends_with("Tab field  Enter save  Esc cancel"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = app_with_tasks(&[]);
        app.show_key_hints = false;
        assert_eq!(render_row(&app), "");
        app.message = Some("hello".into());
        assert_eq!(render_row(&app), " hello");
    }
}
