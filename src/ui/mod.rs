//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the calculator's
//! terminal-based user interface using ratatui.

mod form;
mod results;

pub use form::draw_form;
pub use results::draw_results;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Tab};
use crate::constants::activity::{RUNNING, WALKING};
use crate::constants::goal::DAILY_STEP_GOAL;
use crate::constants::ui::FORM_PANE_PERCENT;
use crate::engine::format::group_thousands;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(1),
            Constraint::Length(3), // Status bar at bottom
        ])
        .split(f.size());

    draw_tabs(f, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(FORM_PANE_PERCENT),
            Constraint::Percentage(100 - FORM_PANE_PERCENT),
        ])
        .split(chunks[1]);

    draw_form(f, app, panes[0]);
    draw_results(f, app, panes[1]);
    draw_status_bar(f, app, chunks[2]);

    // Error message is blocking
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    if app.show_help {
        draw_help_modal(f, app);
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} {} ", app.config.app_name(), app.config.app_version()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled("Commands", Style::default().fg(Color::Yellow)));

    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin of 1 to account for the border
        .split(area)[0];

    let mut commands = vec![("Tab", "Mode"), ("↑/↓", "Field"), ("Enter", "Calculate")];
    if app.focused_field().is_text() {
        commands.push(("Del", "Clear"));
    } else {
        commands.push(("←/→", "Change"));
    }
    if !app.presets().is_empty() {
        commands.push(("F2-F5", "Presets"));
    }
    commands.extend([("?", "Help"), ("q", "Quit")]);

    let status_bar = Paragraph::new(Line::from(create_help_text(&commands)))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, inner_area);
}

/// Build styled help text spans from key-description pairs for the status bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        // Add separator unless it's the last item
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// A rectangle of at most `width` x `height` centered in `outer`.
pub fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width.saturating_sub(4));
    let height = height.min(outer.height.saturating_sub(4));
    Rect {
        x: outer.x + (outer.width.saturating_sub(width)) / 2,
        y: outer.y + (outer.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn draw_error_message(f: &mut Frame, message: &str) {
    let area = centered_rect(f.size(), 44, 7);

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Space after title
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[1]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[2]);
}

// Draw the help modal with keybindings and calculator notes
fn draw_help_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(f.size(), 66, 30);

    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    let help_text: Vec<Line> = build_help_content(app)
        .into_iter()
        .map(|(key, desc, is_header)| {
            if is_header {
                Line::from(vec![Span::styled(
                    key,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )])
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: true });

    f.render_widget(paragraph, inner_area);
}

// Keybindings followed by how the numbers are derived
fn build_help_content(app: &App) -> Vec<(String, String, bool)> {
    let line = |key: &str, desc: &str| (key.to_string(), desc.to_string(), false);
    let header = |title: &str| (title.to_string(), String::new(), true);

    let mut lines = vec![
        header("── Keys ──"),
        line("Tab", "Next mode (Shift-Tab: previous)"),
        line("↑ / ↓", "Move between fields"),
        line("0-9 .", "Type into a number field"),
        line("Del", "Clear the field"),
        line("← → Space", "Change activity, stride method or unit"),
        line("Enter", "Calculate"),
    ];
    if !app.presets().is_empty() {
        lines.push(line("F2-F5", &format!("Presets: {}", app.presets().join(" / "))));
    }
    lines.extend([
        line("? / F1", "Toggle this help"),
        line("q", "Quit"),
        line("", ""),
        header("── How it works ──"),
        line(
            "Stride",
            &format!(
                "Estimated from height: {:.1}% walking, {:.0}% running",
                WALKING.stride_percent * 100.0,
                RUNNING.stride_percent * 100.0
            ),
        ),
        line("Steps/mi", "5,280 feet divided by your stride"),
        line(
            "Calories",
            &format!(
                "{} per step walking, {} running",
                WALKING.calories_per_step, RUNNING.calories_per_step
            ),
        ),
        line(
            "Time",
            &format!(
                "At {} mph walking, {} mph running",
                WALKING.avg_speed_mph, RUNNING.avg_speed_mph
            ),
        ),
        line(
            "Goal",
            &format!("Daily goal of {} steps", group_thousands(u64::from(DAILY_STEP_GOAL))),
        ),
        line("", "Blank height fields use the default height"),
        line("", &format!("({})", app.config.default_height)),
    ]);
    lines
}
