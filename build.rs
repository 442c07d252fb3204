//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the solution-eligible list
    generate_word_list(
        "data/common-words.txt",
        &Path::new(&out_dir).join("common.rs"),
        "COMMON_WORDS",
        "Common five-letter words, eligible as solutions",
    );

    // Generate the guess-only list
    generate_word_list(
        "data/uncommon-words.txt",
        &Path::new(&out_dir).join("uncommon.rs"),
        "UNCOMMON_WORDS",
        "Uncommon five-letter words, accepted as guesses but never drawn as solutions",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/common-words.txt");
    println!("cargo:rerun-if-changed=data/uncommon-words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
