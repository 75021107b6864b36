use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::create_titled_block;
use crate::app::{App, Field};

const LABEL_WIDTH: usize = 14;

/// Draw the active tab's input form, with the cursor in the focused text field.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let block = create_titled_block(" Input ", true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = app.fields();
    let focused = app.focused_field();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fields.len() as u16 * 2),
            Constraint::Min(1), // Presets and hints
        ])
        .split(inner);

    let mut lines = Vec::with_capacity(fields.len() * 2);
    for (row, &field) in fields.iter().enumerate() {
        let is_focused = field == focused;
        lines.push(field_line(app, field, is_focused));
        lines.push(Line::default());

        if is_focused && field.is_text() {
            let value = app.field_value(field);
            let x = chunks[0].x + (LABEL_WIDTH + 4 + value.width()) as u16;
            let y = chunks[0].y + (row * 2) as u16;
            if x < chunks[0].right() && y < chunks[0].bottom() {
                f.set_cursor(x, y);
            }
        }
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    f.render_widget(
        Paragraph::new(preset_lines(app)).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn field_line(app: &App, field: Field, is_focused: bool) -> Line<'static> {
    let marker = if is_focused { "▶ " } else { "  " };
    let label_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = app.field_value(field);
    let value_span = if field.is_text() {
        let style = if is_focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!(" {value}"), style)
    } else {
        let style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!("‹ {value} ›"), style)
    };

    Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
        Span::raw(" "),
        value_span,
    ])
}

fn preset_lines(app: &App) -> Vec<Line<'static>> {
    let presets = app.presets();
    if presets.is_empty() {
        return vec![Line::from(Span::styled(
            "Leave height blank to use the default.",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let active = app.active_preset[app.tab.index()];
    let mut spans = vec![Span::styled("Presets ", Style::default().fg(Color::Gray))];
    for (i, value) in presets.iter().enumerate() {
        let style = if active == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(format!(" F{} {value} ", i + 2), style));
    }
    vec![Line::from(spans)]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::app::Tab;
    use crate::config::Config;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn selection_fields_show_arrows() {
        let app = App::new(Config::default());
        let text = line_text(&field_line(&app, Field::Activity, false));
        assert!(text.contains("‹ Walking ›"));
    }

    #[test]
    fn focused_field_has_marker() {
        let app = App::new(Config::default());
        let text = line_text(&field_line(&app, Field::Steps, true));
        assert!(text.starts_with("▶ Steps"));
    }

    #[test]
    fn stride_tab_has_no_presets() {
        let mut app = App::new(Config::default());
        app.switch_tab(Tab::Stride);
        let lines = preset_lines(&app);
        assert!(line_text(&lines[0]).contains("default"));
    }

    #[test]
    fn presets_are_numbered_from_f2() {
        let app = App::new(Config::default());
        let text = line_text(&preset_lines(&app)[0]);
        assert!(text.contains("F2 5000"));
        assert!(text.contains("F5 15000"));
    }
}
