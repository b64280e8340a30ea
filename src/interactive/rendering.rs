//! TUI rendering with ratatui
//!
//! Screen layout for the interactive pattern search.

use super::app::{App, MessageStyle};
use crate::output::formatters::mode_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Match list
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_matches(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD FINDER - Pattern Search")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.report {
        Some(report) if report.is_capped() => format!(" Matches ({}+) ", report.match_count()),
        Some(report) => format!(" Matches ({}) ", report.match_count()),
        None => " Matches ".to_string(),
    };

    if app.view.is_empty() {
        let text = if app.report.is_some() {
            "No words match this pattern."
        } else {
            "Enter a pattern below.\n\n\
             cat   complete anagrams of C, A, T\n\
             ca+   C and A plus one unknown letter\n\
             c.t   crossword: C _ T\n\n\
             TAB toggles subset mode for rack searches."
        };
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Green)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = app
        .view
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible)
        .map(|(i, word)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4}  ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(word.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Last search summary
            Constraint::Percentage(25), // Dictionary coverage gauge
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_summary(f, app, chunks[0]);
    render_coverage(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(ref report) = app.report {
        vec![
            Line::from(vec![
                Span::raw("Pattern: "),
                Span::styled(
                    report.pattern().to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Mode:    {}", mode_label(report.mode()))),
            Line::from(format!("Matches: {}", report.match_count())),
            Line::from(format!("Order:   {}", app.sort_label())),
            Line::from(format!(
                "Subset:  {}",
                if app.allow_subset { "on" } else { "off" }
            )),
        ]
    } else {
        vec![Line::from("No search yet")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Last Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_coverage(f: &mut Frame, app: &App, area: Rect) {
    let dictionary_size = app.solver.dictionary().len();
    let matched = app.match_count();
    let percent = if dictionary_size == 0 {
        0
    } else {
        ((matched as f64 / dictionary_size as f64) * 100.0).min(100.0) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Dictionary Coverage ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{matched} of {dictionary_size} words"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Pattern ('+' = unknown, '.' = blank) | Enter to search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let subset_text = format!("Subset: {}", if app.allow_subset { "on" } else { "off" });
    let subset = Paragraph::new(subset_text).alignment(Alignment::Center);
    f.render_widget(subset, chunks[0]);

    let order_text = format!("Order: {}", app.sort_label());
    let order = Paragraph::new(order_text).alignment(Alignment::Center);
    f.render_widget(order, chunks[1]);

    let dictionary_text = format!("Dictionary: {} words", app.solver.dictionary().len());
    let dictionary = Paragraph::new(dictionary_text).alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[2]);

    let help = Paragraph::new("TAB: Subset | ←/→: Order | ↑/↓: Scroll | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
