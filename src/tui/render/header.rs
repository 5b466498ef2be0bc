use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Title on the left, sort and theme on the right, separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.palette.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " ToDo",
        Style::default()
            .fg(app.palette.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let right = vec![
        Span::styled("Sort: ", Style::default().fg(app.palette.dim).bg(bg)),
        Span::styled(
            format!("{} ({})", app.sort.key.label(), app.sort.order.label()),
            Style::default().fg(app.palette.text).bg(bg),
        ),
        Span::styled("  Theme: ", Style::default().fg(app.palette.dim).bg(bg)),
        Span::styled(
            format!("{} ", app.theme.label()),
            Style::default().fg(app.palette.text).bg(bg),
        ),
    ];

    let left_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let right_width: usize = right.iter().map(|s| unicode::display_width(&s.content)).sum();
    if left_width + right_width < width {
        let padding = width - left_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.extend(right);
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.palette.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(separator)), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortKey;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_sort_and_theme() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert!(first.starts_with(" ToDo"));
        assert!(first.ends_with("Sort: Date (Asc)  Theme: Light"));
    }

    #[test]
    fn header_follows_state_changes() {
        let mut app = app_with_tasks(&[]);
        app.select_sort(SortKey::Priority);
        app.select_sort(SortKey::Priority);
        app.toggle_theme();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("Sort: Priority (Desc)  Theme: Dark"));
    }

    #[test]
    fn narrow_header_drops_right_side() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(20, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.starts_with(" ToDo"));
        assert!(!output.contains("Sort:"));
    }
}
