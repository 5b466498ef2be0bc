use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ops::parse_due_date;
use crate::tui::app::{App, Form, FormField, FormKind};
use crate::util::unicode;

const DATE_WIDTH: usize = 16;

/// Render the add/edit form as a bordered single-line block
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };
    let bg = app.palette.background;
    let title = match form.kind {
        FormKind::Add => " Add task ",
        FormKind::Edit(_) => " Edit task ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.palette.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.palette.accent).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = form_line(app, form, inner.width as usize);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);
}

fn form_line(app: &App, form: &Form, width: usize) -> Line<'static> {
    let bg = app.palette.background;
    let label_style = |field: FormField| {
        if form.field == field {
            Style::default()
                .fg(app.palette.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.palette.dim).bg(bg)
        }
    };
    let value_style = Style::default().fg(app.palette.text).bg(bg);
    let cursor = |field: FormField| {
        let symbol = if form.field == field { "\u{258C}" } else { " " };
        Span::styled(symbol, Style::default().fg(app.palette.accent).bg(bg))
    };

    let priority = if form.priority.is_empty() {
        "-"
    } else {
        form.priority.as_str()
    };
    let date_style = if form.date.is_empty() || parse_due_date(&form.date).is_some() {
        value_style
    } else {
        Style::default().fg(app.palette.error).bg(bg)
    };

    // Everything but the text column: labels, two cursors, date, widest priority
    let fixed = " Text: ".len() + 1 + " Date: ".len() + DATE_WIDTH + 1 + "  Priority: ".len() + 10;
    let text_width = width.saturating_sub(fixed).max(1);

    Line::from(vec![
        Span::styled(" ", value_style),
        Span::styled("Text: ", label_style(FormField::Text)),
        Span::styled(unicode::fit_to_width(&form.text, text_width), value_style),
        cursor(FormField::Text),
        Span::styled(" Date: ", label_style(FormField::Date)),
        Span::styled(unicode::fit_to_width(&form.date, DATE_WIDTH), date_style),
        cursor(FormField::Date),
        Span::styled("  Priority: ", label_style(FormField::Priority)),
        Span::styled(
            format!("\u{2039} {priority} \u{203A}"),
            Style::default()
                .fg(app.palette.priority_color(&form.priority))
                .bg(bg),
        ),
    ])
}
