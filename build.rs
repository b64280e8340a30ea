//! Build script to generate the embedded dictionary
//!
//! Reads data/dictionary.txt and writes a Rust source file declaring the
//! word array and its length, included by `wordlists::embedded`.

use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const WORD_LIST: &str = "data/dictionary.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let target = Path::new(&out_dir).join("dictionary.rs");

    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    write_dictionary(&target, &words);

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn write_dictionary(target: &Path, words: &[&str]) {
    let file = fs::File::create(target)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", target.display()));
    let mut out = BufWriter::new(file);

    writeln!(out, "// Generated from {WORD_LIST}; do not edit").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Every bundled dictionary word, lowercase, in file order").unwrap();
    writeln!(out, "pub const DICTIONARY: &[&str] = &[").unwrap();
    for word in words {
        writeln!(out, "    {word:?},").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in DICTIONARY").unwrap();
    writeln!(out, "pub const DICTIONARY_COUNT: usize = {};", words.len()).unwrap();
}
