//! Word Finder - CLI
//!
//! Anagram and word-pattern finder with TUI and CLI modes, covering complete
//! anagrams, missing-letter searches, crossword blanks, and Scrabble racks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use anagrams::{
    commands::{PracticeConfig, SolveRequest, run_batch, run_practice, run_simple, run_solve},
    core::Word,
    logging::init_logger,
    output::{print_batch_report, print_solve_outcome},
    solver::{DEFAULT_RESULT_CAP, SortOrder, Solver},
    wordlists::{DICTIONARY, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "anagrams",
    about = "Anagram and word-pattern finder for puzzles, crosswords, and Scrabble racks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled dictionary) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum number of matches kept per search
    #[arg(long, global = true, default_value_t = DEFAULT_RESULT_CAP)]
    cap: usize,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive search without TUI)
    Simple,

    /// Solve a single pattern and print the matches
    Solve {
        /// Pattern to search: letters, '+' for unknown letters, '.' for blanks
        pattern: String,

        /// Subset mode: match words using only some of the letters
        #[arg(long)]
        subset: bool,

        /// Result order: alpha, za, shortest, longest (default: dictionary order)
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Run every pattern in a file and print a summary
    Batch {
        /// File with one pattern per line ('#' starts a comment)
        file: String,

        /// Subset mode for every pattern in the file
        #[arg(long)]
        subset: bool,
    },

    /// Anagram practice game
    Practice {
        /// Shortest practice word
        #[arg(long, default_value = "5")]
        min_len: usize,

        /// Longest practice word
        #[arg(long, default_value = "8")]
        max_len: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the bundled word list compiled into the binary
/// - "<path>": load a custom wordlist from file, same normalization
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use anagrams::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read wordlist '{path}'"))?;
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.debug);

    let words = load_wordlist(&cli.wordlist)?;
    if words.is_empty() {
        log::warn!("wordlist '{}' contains no usable words", cli.wordlist);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, cli.cap),
        Commands::Simple => run_simple_command(&words, cli.cap),
        Commands::Solve {
            pattern,
            subset,
            sort,
        } => run_solve_command(&pattern, subset, sort.as_deref(), &words, cli.cap),
        Commands::Batch { file, subset } => run_batch_command(&file, subset, &words, cli.cap),
        Commands::Practice { min_len, max_len } => {
            run_practice_command(min_len, max_len, &words, cli.cap)
        }
    }
}

fn run_solve_command(
    pattern: &str,
    subset: bool,
    sort_name: Option<&str>,
    words: &[Word],
    cap: usize,
) -> Result<()> {
    // Unknown order names fall back to dictionary order
    let sort = sort_name.and_then(|name| {
        let order = SortOrder::from_name(name);
        if order.is_none() {
            log::warn!("unknown sort order '{name}' (try: alpha, za, shortest, longest)");
        }
        order
    });

    let solver = Solver::new(words).with_result_cap(cap);
    let mut request = SolveRequest::new(pattern.to_string());
    request.allow_subset = subset;
    request.sort = sort;

    let outcome = run_solve(&request, &solver)?;
    print_solve_outcome(&outcome);
    Ok(())
}

fn run_batch_command(file: &str, subset: bool, words: &[Word], cap: usize) -> Result<()> {
    let solver = Solver::new(words).with_result_cap(cap);
    let report = run_batch(file, &solver, subset)
        .with_context(|| format!("failed to read pattern file '{file}'"))?;
    print_batch_report(&report);
    Ok(())
}

fn run_practice_command(min_len: usize, max_len: usize, words: &[Word], cap: usize) -> Result<()> {
    let solver = Solver::new(words).with_result_cap(cap);
    let config = PracticeConfig::new(min_len, max_len);
    run_practice(&solver, &config).map_err(|e| anyhow::anyhow!(e))
}

fn run_simple_command(words: &[Word], cap: usize) -> Result<()> {
    let solver = Solver::new(words).with_result_cap(cap);
    run_simple(&solver).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(words: &[Word], cap: usize) -> Result<()> {
    use anagrams::interactive::{App, run_tui};

    let solver = Solver::new(words).with_result_cap(cap);
    let app = App::new(solver);
    run_tui(app)
}
