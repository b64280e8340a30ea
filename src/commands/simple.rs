//! Simple interactive CLI mode
//!
//! Text-based interactive finder without TUI. Enter a pattern to solve it;
//! colon commands adjust matching and reorder the last result set.

use super::solve::{SolveOutcome, SolveRequest, run_solve};
use crate::output::print_solve_outcome;
use crate::solver::{SortOrder, Solver};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Finder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter a pattern to search the dictionary:\n");
    println!("  letters only   complete anagram (silent finds listen)");
    println!("  +              one unknown letter (c+t finds cat, cot, cut)");
    println!("  .              crossword blank, positions line up (c.t)\n");
    println!("Commands: ':subset on|off', ':sort ORDER', ':help', ':quit'\n");

    let mut allow_subset = false;
    let mut last: Option<SolveOutcome> = None;

    loop {
        let input = get_user_input("Pattern")?;

        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix(':') {
            let command = command.trim();
            match command {
                "quit" | "q" | "exit" => {
                    println!("\nBye!\n");
                    return Ok(());
                }
                "help" | "h" => print_help(),
                "subset on" => {
                    allow_subset = true;
                    println!("Subset matching on: words may use only some of the letters.\n");
                }
                "subset off" => {
                    allow_subset = false;
                    println!("Subset matching off: exact modes only.\n");
                }
                _ => {
                    if let Some(name) = command.strip_prefix("sort ") {
                        sort_last_results(name, last.as_mut());
                    } else {
                        println!("Unknown command ':{command}'. Type ':help' for help.\n");
                    }
                }
            }
            continue;
        }

        // Anything else is a pattern
        let mut request = SolveRequest::new(input);
        request.allow_subset = allow_subset;

        match run_solve(&request, solver) {
            Ok(outcome) => {
                print_solve_outcome(&outcome);
                println!();
                last = Some(outcome);
            }
            Err(e) => println!("{e}\n"),
        }
    }
}

/// Re-sort the last result set in place; matching is not re-run
fn sort_last_results(name: &str, last: Option<&mut SolveOutcome>) {
    let Some(order) = SortOrder::from_name(name) else {
        println!(
            "Unknown order {name:?}; results left as they are. \
             Try alpha, za, shortest, or longest.\n"
        );
        return;
    };

    match last {
        Some(outcome) => {
            outcome.report.sort(order);
            println!("Sorted: {}.", order.label());
            print_solve_outcome(outcome);
            println!();
        }
        None => println!("Nothing to sort yet; solve a pattern first.\n"),
    }
}

fn print_help() {
    println!("\nPattern syntax:");
    println!("  letters only   complete anagram of the letters");
    println!("  +              one unknown letter anywhere (c+t)");
    println!("  .              crossword blank at that position (c.t)");
    println!("\nCommands:");
    println!("  :subset on|off  scrabble mode, words may use a subset of the letters");
    println!("  :sort ORDER     re-sort the last results (alpha, za, shortest, longest)");
    println!("  :help           this text");
    println!("  :quit           leave\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        // EOF behaves like :quit
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
