use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::create_titled_block;
use crate::app::{App, Tab};
use crate::engine::format::{format_time, group_thousands, stride_summary};
use crate::engine::{DistanceToSteps, ReferenceTableRow, StepsPerMile, StepsToDistance};
use crate::narrative::{DistanceNarrative, StepsNarrative, StrideNarrative, Tip};
use crate::types::{Height, StrideInput};

/// Draw the result of the last calculation on the active tab.
pub fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let block = create_titled_block(" Results ", false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.tab {
        Tab::Steps => match &app.steps_outcome {
            Some(o) => draw_steps(f, &o.result, &o.narrative, inner),
            None => draw_placeholder(f, "Enter a step count and press Enter.", inner),
        },
        Tab::Distance => match &app.distance_outcome {
            Some(o) => draw_distance(f, &o.result, &o.narrative, inner),
            None => draw_placeholder(f, "Enter a distance and press Enter.", inner),
        },
        Tab::Stride => match &app.stride_outcome {
            Some(o) => draw_stride(f, &o.result, &o.narrative, inner),
            None => draw_placeholder(f, "Press Enter to calculate your steps per mile.", inner),
        },
    }
}

fn draw_placeholder(f: &mut Frame, message: &str, area: Rect) {
    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(text, area);
}

fn draw_steps(f: &mut Frame, r: &StepsToDistance, n: &StepsNarrative, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Headline
            Constraint::Length(3), // Goal gauge
            Constraint::Length(9), // Summary
            Constraint::Min(4),    // Tips and interpretation
        ])
        .split(area);

    let headline = Line::from(vec![
        Span::styled(
            format!("{} miles", r.miles_display()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {} km", r.kilometers_display()), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(headline), chunks[0]);

    draw_goal(f, r.goal_percent, &n.goal_note, chunks[1]);

    let rows = vec![
        summary_row("Distance", format!("{} mi ({} km)", r.miles_display(), r.kilometers_display())),
        summary_row("Steps", group_thousands(u64::from(r.steps))),
        summary_row("Calories", format!("{} calories", r.calories)),
        summary_row("Time", format_time(r.time_minutes)),
        summary_row("Steps per mile", format!("{} steps/mile", group_thousands(u64::from(r.steps_per_mile)))),
        summary_row("Stride", stride_summary(r.stride)),
        summary_row("Activity", r.activity.name().to_string()),
        summary_row("Height", height_display(&r.stride_input)),
    ];
    draw_summary(f, rows, chunks[2]);

    let mut lines = tip_lines(&n.tips);
    lines.push(Line::default());
    lines.extend(interpretation_lines(&n.interpretation));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);
}

fn draw_distance(f: &mut Frame, r: &DistanceToSteps, n: &DistanceNarrative, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Headline
            Constraint::Length(3), // Goal gauge
            Constraint::Length(8), // Summary
            Constraint::Min(3),    // Interpretation
        ])
        .split(area);

    let headline = Line::from(vec![
        Span::styled(
            format!("{} steps", group_thousands(u64::from(r.steps))),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} mi = {} km", r.miles_display(), r.kilometers_display()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(headline), chunks[0]);

    draw_goal(f, r.goal_percent, &n.goal_note, chunks[1]);

    let rows = vec![
        summary_row("Steps", group_thousands(u64::from(r.steps))),
        summary_row("Distance", format!("{} mi ({} km)", r.miles_display(), r.kilometers_display())),
        summary_row("Steps per mile", group_thousands(u64::from(r.steps_per_mile))),
        summary_row("Steps per km", group_thousands(u64::from(r.steps_per_km))),
        summary_row("Stride", stride_summary(r.summary_stride())),
        summary_row("Activity", r.activity.name().to_string()),
        summary_row("Height", height_display(&r.stride_input)),
    ];
    draw_summary(f, rows, chunks[2]);

    f.render_widget(
        Paragraph::new(interpretation_lines(&n.interpretation)).wrap(Wrap { trim: true }),
        chunks[3],
    );
}

fn draw_stride(f: &mut Frame, r: &StepsPerMile, n: &StrideNarrative, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Headline
            Constraint::Length(7),  // Summary
            Constraint::Length(5),  // Interpretation
            Constraint::Min(6),     // Reference table
        ])
        .split(area);

    let headline = Line::from(vec![
        Span::styled(
            format!("{} steps/mile", group_thousands(u64::from(r.steps_per_mile))),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", r.activity.name()), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(headline), chunks[0]);

    let rows = vec![
        summary_row("Steps per mile", group_thousands(u64::from(r.steps_per_mile))),
        summary_row("Steps per km", group_thousands(u64::from(r.steps_per_km))),
        summary_row("Stride", stride_summary(r.stride)),
        summary_row("Activity", r.activity.name().to_string()),
        summary_row("Height", r.height_display()),
        summary_row("Source", r.stride_source().to_string()),
    ];
    draw_summary(f, rows, chunks[1]);

    f.render_widget(
        Paragraph::new(interpretation_lines(&n.interpretation)).wrap(Wrap { trim: true }),
        chunks[2],
    );

    draw_reference_table(f, &r.reference_table, r.stride_input.height(), chunks[3]);
}

fn draw_goal(f: &mut Frame, percent: u32, note: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let color = if percent >= 100 { Color::Green } else { Color::Yellow };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::TOP).title("Daily goal"))
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(gauge_percent(percent))
        .label(format!("{percent}%"));
    f.render_widget(gauge, chunks[0]);

    f.render_widget(
        Paragraph::new(note.to_string()).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

/// Gauge fill; distances past the goal report more than 100%.
#[allow(clippy::cast_possible_truncation)]
fn gauge_percent(percent: u32) -> u16 {
    percent.min(100) as u16
}

fn summary_row(label: &'static str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(label).style(Style::default().fg(Color::Gray)),
        Cell::from(value).style(Style::default().fg(Color::White)),
    ])
}

fn draw_summary(f: &mut Frame, rows: Vec<Row<'static>>, area: Rect) {
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
        .block(Block::default().borders(Borders::TOP).title("Summary"));
    f.render_widget(table, area);
}

fn height_display(stride: &StrideInput) -> String {
    stride
        .height()
        .map_or_else(|| "Custom stride".to_string(), |h| h.to_string())
}

fn tip_lines(tips: &[Tip]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Tips",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    for tip in tips {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", tip.title), Style::default().fg(Color::Yellow)),
            Span::raw(tip.text.clone()),
        ]));
    }
    lines
}

fn interpretation_lines(text: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "What this means",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(text.to_string()),
    ]
}

fn draw_reference_table(
    f: &mut Frame,
    rows: &[ReferenceTableRow],
    height: Option<Height>,
    area: Rect,
) {
    let header = Row::new(vec!["Height", "Stride (walk / run)", "Walking", "Running"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let style = if Some(row.height) == height {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                row.height.to_string(),
                row.stride_display(),
                group_thousands(u64::from(row.walking_steps_per_mile)),
                group_thousands(u64::from(row.running_steps_per_mile)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        body,
        [
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::TOP).title("Steps per mile by height"));
    f.render_widget(table, area);
}
