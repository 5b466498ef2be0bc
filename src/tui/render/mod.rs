pub mod form_view;
pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.palette.background).fg(app.palette.text);
    frame.render_widget(Block::default().style(bg_style), area);

    let form_height = if app.form.is_some() { 3 } else { 0 };

    // Layout: header (2 rows) | form (3 rows, when open) | lists | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(form_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    if app.form.is_some() {
        form_view::render_form(frame, app, chunks[1]);
    }
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_tasks(&[("Write report", "2024-03-01", "High")]);
        app.open_add_form();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("ToDo"));
        assert!(output.contains("Add task"));
        assert!(output.contains("Your tasks:"));
        assert!(output.contains("Write report"));
        assert!(output.contains("Enter save"));
    }

    #[test]
    fn delete_message_shows_in_status_row() {
        let mut app = app_with_tasks(&[("Old chore", "", ""), ("Keep", "", "")]);
        app.delete_selected();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let last = output.lines().last().unwrap();
        assert!(last.starts_with(" Deleted \"Old chore\""));
        assert!(!output.contains("[ ] Old chore"));
    }

    #[test]
    fn help_overlay_renders_on_top() {
        let mut app = app_with_tasks(&[]);
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Move cursor up/down"));
    }
}
