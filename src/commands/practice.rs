//! Anagram practice game
//!
//! Picks a random dictionary word, presents its letters scrambled, and
//! accepts any dictionary word that is a complete anagram of those letters.

use crate::core::Word;
use crate::solver::{SolveOptions, Solver};
use colored::Colorize;
use rand::prelude::{IndexedRandom, SliceRandom};
use std::io::{self, Write};

/// Length bounds for practice words
pub struct PracticeConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl PracticeConfig {
    #[must_use]
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }
}

/// Pick a random dictionary word within the configured length range
#[must_use]
pub fn pick_word<'a>(dictionary: &'a [Word], config: &PracticeConfig) -> Option<&'a Word> {
    let eligible: Vec<&Word> = dictionary
        .iter()
        .filter(|w| w.len() >= config.min_len && w.len() <= config.max_len)
        .collect();

    eligible.choose(&mut rand::rng()).copied()
}

/// Scramble a word's letters
///
/// Retries a few times so the scramble usually differs from the word
/// itself; a word of repeated letters can only come back unchanged.
#[must_use]
pub fn scramble(word: &Word) -> String {
    let mut letters: Vec<u8> = word.text().bytes().collect();
    let mut rng = rand::rng();

    for _ in 0..4 {
        letters.shuffle(&mut rng);
        if letters != word.text().as_bytes() {
            break;
        }
    }

    letters.iter().map(|&b| char::from(b)).collect()
}

/// Run the practice game loop
///
/// # Errors
///
/// Returns an error if no dictionary word fits the length range or if
/// reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_practice(solver: &Solver<'_>, config: &PracticeConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Anagram Practice                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters into a dictionary word.");
    println!("Commands: 'hint' for a clue, 'show' to reveal, 'new' for another");
    println!("word, 'quit' to stop.\n");

    let mut solved = 0u32;
    let mut revealed = 0u32;

    'game: loop {
        let secret = pick_word(solver.dictionary(), config)
            .ok_or("No dictionary words in that length range")?;

        // The full anagram family of the secret: every member is a win
        let answers = solver
            .solve(secret.text(), SolveOptions::default())
            .map_err(|e| e.to_string())?;

        let scrambled = scramble(secret);
        println!(
            "Letters: {}   ({} letters)",
            scrambled.to_uppercase().bright_yellow().bold(),
            secret.len()
        );

        loop {
            let input = get_user_input("Your word")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => break 'game,
                "new" | "n" => {
                    println!();
                    continue 'game;
                }
                "hint" => {
                    println!(
                        "  Starts with '{}'; {} word{} hiding in these letters\n",
                        secret.text().chars().next().unwrap_or('?'),
                        answers.match_count(),
                        if answers.match_count() == 1 { "" } else { "s" }
                    );
                }
                "show" => {
                    revealed += 1;
                    println!(
                        "  The word was {}  (all answers: {})\n",
                        secret.text().to_uppercase().bright_cyan().bold(),
                        answers.words().join(", ")
                    );
                    continue 'game;
                }
                "" => {}
                guess => {
                    if answers.words().iter().any(|w| w == guess) {
                        solved += 1;
                        println!("  {} {}\n", "Correct!".green().bold(), guess.to_uppercase());
                        continue 'game;
                    }
                    println!("  Not it. Try again, or 'hint'.\n");
                }
            }
        }
    }

    println!("\nSolved {solved}, revealed {revealed}. Thanks for playing!\n");
    Ok(())
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
        // EOF ends the game
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
