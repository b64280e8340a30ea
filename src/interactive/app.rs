//! TUI application state and logic

use crate::solver::{SolveOptions, SolveReport, Solver, SortOrder};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// How many rows a PageUp/PageDown jump moves
const SCROLL_PAGE: usize = 10;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub input_buffer: String,
    pub allow_subset: bool,
    /// Last report as solved, in dictionary order
    pub report: Option<SolveReport>,
    /// The words on screen: the report's words, reordered by the sort slot
    pub view: Vec<String>,
    /// Current slot in the sort cycle; `None` is dictionary order
    pub sort: Option<SortOrder>,
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        Self {
            solver,
            input_buffer: String::new(),
            allow_subset: false,
            report: None,
            view: Vec::new(),
            sort: None,
            scroll: 0,
            messages: vec![
                Message {
                    text: "Type a pattern and press Enter to search the dictionary.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "'+' = unknown letter, '.' = crossword blank, TAB = subset mode."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Solve the current input buffer
    pub fn submit(&mut self) {
        let query = self.input_buffer.trim().to_string();
        if query.is_empty() {
            return;
        }

        let options = SolveOptions {
            allow_subset: self.allow_subset,
        };

        match self.solver.solve(&query, options) {
            Ok(report) => {
                let summary = if report.is_capped() {
                    format!(
                        "{} matches for '{}' (first {} shown)",
                        report.match_count(),
                        report.pattern(),
                        self.solver.result_cap()
                    )
                } else {
                    format!("{} matches for '{}'", report.match_count(), report.pattern())
                };
                let style = if report.match_count() == 0 {
                    MessageStyle::Info
                } else {
                    MessageStyle::Success
                };
                self.add_message(&summary, style);

                self.report = Some(report);
                self.refresh_view();
                self.input_buffer.clear();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Rebuild the on-screen word list from the held report and sort slot
    fn refresh_view(&mut self) {
        self.view = self
            .report
            .as_ref()
            .map(|r| r.words().to_vec())
            .unwrap_or_default();

        if let Some(order) = self.sort {
            order.apply(&mut self.view);
        }

        self.scroll = 0;
    }

    /// Flip subset matching; takes effect on the next solve
    pub fn toggle_subset(&mut self) {
        self.allow_subset = !self.allow_subset;
        let text = if self.allow_subset {
            "Subset matching on: words may use only some of the letters."
        } else {
            "Subset matching off: exact modes only."
        };
        self.add_message(text, MessageStyle::Info);
    }

    /// Move one step through the sort cycle and reorder the held results
    ///
    /// The cycle is dictionary order followed by `SortOrder::ALL`. Matching
    /// is not re-run.
    pub fn cycle_sort(&mut self, forward: bool) {
        let cycle_len = SortOrder::ALL.len() + 1;
        let position = match self.sort {
            None => 0,
            Some(order) => 1 + SortOrder::ALL.iter().position(|&o| o == order).unwrap_or(0),
        };

        let next = if forward {
            (position + 1) % cycle_len
        } else {
            (position + cycle_len - 1) % cycle_len
        };

        self.sort = if next == 0 {
            None
        } else {
            Some(SortOrder::ALL[next - 1])
        };

        self.refresh_view();
        self.add_message(&format!("Order: {}", self.sort_label()), MessageStyle::Info);
    }

    /// The current sort slot's display name
    #[must_use]
    pub fn sort_label(&self) -> &'static str {
        self.sort.map_or("dictionary order", SortOrder::label)
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.view.len().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    /// Esc: clear the input first, then the results, then quit
    pub fn escape(&mut self) {
        if !self.input_buffer.is_empty() {
            self.input_buffer.clear();
        } else if self.report.is_some() {
            self.report = None;
            self.refresh_view();
            self.add_message("Results cleared.", MessageStyle::Info);
        } else {
            self.should_quit = true;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Match count of the held report, 0 when there is none
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.report.as_ref().map_or(0, SolveReport::match_count)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.escape(),
                KeyCode::Tab => app.toggle_subset(),
                KeyCode::Left => app.cycle_sort(false),
                KeyCode::Right => app.cycle_sort(true),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::PageUp => app.scroll_up(SCROLL_PAGE),
                KeyCode::PageDown => app.scroll_down(SCROLL_PAGE),
                KeyCode::Enter => app.submit(),
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary(entries: &[&str]) -> Vec<Word> {
        entries.iter().map(|e| Word::new(*e).unwrap()).collect()
    }

    #[test]
    fn submit_solves_and_clears_input() {
        let dict = dictionary(&["cat", "act"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "cat".to_string();
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.view, vec!["cat", "act"]);
        assert_eq!(app.match_count(), 2);
    }

    #[test]
    fn submit_keeps_input_on_error() {
        let dict = dictionary(&["cat"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "ca7".to_string();
        app.submit();

        assert_eq!(app.input_buffer, "ca7");
        assert!(app.report.is_none());
    }

    #[test]
    fn cycle_sort_wraps_both_ways() {
        let dict = dictionary(&["cat"]);
        let mut app = App::new(Solver::new(&dict));

        assert_eq!(app.sort, None);
        app.cycle_sort(true);
        assert_eq!(app.sort, Some(SortOrder::LexAsc));

        for _ in 0..SortOrder::ALL.len() {
            app.cycle_sort(true);
        }
        assert_eq!(app.sort, None);

        app.cycle_sort(false);
        assert_eq!(app.sort, Some(SortOrder::LenDesc));
    }

    #[test]
    fn cycle_sort_reorders_view_without_resolving() {
        let dict = dictionary(&["tops", "spot", "opts", "pots", "stop"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "post".to_string();
        app.submit();
        assert_eq!(app.view, vec!["tops", "spot", "opts", "pots", "stop"]);

        app.cycle_sort(true); // alphabetical
        assert_eq!(app.view, vec!["opts", "pots", "spot", "stop", "tops"]);

        // Back to dictionary order without re-matching
        app.cycle_sort(false);
        assert_eq!(app.view, vec!["tops", "spot", "opts", "pots", "stop"]);
    }

    #[test]
    fn toggle_subset_changes_next_solve() {
        let dict = dictionary(&["at", "cat", "cats"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "cat".to_string();
        app.submit();
        assert_eq!(app.view, vec!["cat"]);

        app.toggle_subset();
        app.input_buffer = "cat".to_string();
        app.submit();
        assert_eq!(app.view, vec!["at", "cat"]);
    }

    #[test]
    fn escape_clears_input_then_results_then_quits() {
        let dict = dictionary(&["cat"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "cat".to_string();
        app.submit();
        app.input_buffer = "do".to_string();

        app.escape();
        assert!(app.input_buffer.is_empty());
        assert!(app.report.is_some());

        app.escape();
        assert!(app.report.is_none());
        assert!(!app.should_quit);

        app.escape();
        assert!(app.should_quit);
    }

    #[test]
    fn scroll_clamps_to_results() {
        let dict = dictionary(&["tops", "spot", "opts", "pots", "stop"]);
        let mut app = App::new(Solver::new(&dict));

        app.input_buffer = "post".to_string();
        app.submit();

        app.scroll_down(100);
        assert_eq!(app.scroll, 4);
        app.scroll_up(2);
        assert_eq!(app.scroll, 2);
        app.scroll_up(100);
        assert_eq!(app.scroll, 0);
    }
}
