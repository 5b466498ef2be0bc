use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

const DATE_COL: usize = 16;
const PRIORITY_COL: usize = 6;

/// Render "Your tasks:" followed by "Completed tasks:" when any are done
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.palette.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.palette.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    app.clamp_cursors();
    let width = area.width as usize;
    let header_style = Style::default()
        .fg(app.palette.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let view = app.projection();
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    lines.push(Line::from(Span::styled(" Your tasks:", header_style)));
    for (i, task) in view.tasks.iter().enumerate() {
        let is_cursor = app.focus == Focus::Tasks && i == app.cursor;
        if is_cursor {
            cursor_line = lines.len();
        }
        lines.push(task_row(app, task, is_cursor, width));
    }

    if !view.completed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Completed tasks:", header_style)));
        for (i, task) in view.completed.iter().enumerate() {
            let is_cursor = app.focus == Focus::Completed && i == app.completed_cursor;
            if is_cursor {
                cursor_line = lines.len();
            }
            lines.push(task_row(app, task, is_cursor, width));
        }
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if cursor_line < app.scroll_offset {
        app.scroll_offset = cursor_line;
    } else if height > 0 && cursor_line >= app.scroll_offset + height {
        app.scroll_offset = cursor_line + 1 - height;
    }
    if cursor_line == 1 {
        // First task: show the section header too
        app.scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .scroll((app.scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// One task: cursor bar, checkbox, text, date, priority
fn task_row(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let palette = &app.palette;
    let bg = if is_cursor {
        palette.selection_bg
    } else {
        palette.background
    };
    let text_color = if task.completed {
        palette.completed
    } else {
        palette.text
    };

    let fixed = 1 + 4 + 2 + DATE_COL + 2 + PRIORITY_COL;
    let text_width = width.saturating_sub(fixed).max(1);
    let check = if task.completed { "[x] " } else { "[ ] " };

    let mut text_style = Style::default().fg(text_color).bg(bg);
    if task.completed {
        text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
    }

    Line::from(vec![
        if is_cursor {
            Span::styled("\u{258E}", Style::default().fg(palette.accent).bg(bg))
        } else {
            Span::styled(" ", Style::default().bg(bg))
        },
        Span::styled(check, Style::default().fg(text_color).bg(bg)),
        Span::styled(unicode::fit_to_width(&task.text, text_width), text_style),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            unicode::fit_to_width(&format!("Date: {}", task.date), DATE_COL),
            Style::default().fg(palette.dim).bg(bg),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            unicode::fit_to_width(&task.priority, PRIORITY_COL),
            Style::default()
                .fg(palette.priority_color(&task.priority))
                .bg(bg),
        ),
    ])
}
