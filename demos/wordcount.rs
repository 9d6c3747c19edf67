//! Demo: counting exact-word occurrences in a dictionary file.
//!
//! Loads a dictionary (a word count followed by that many words), echoes the
//! word list, builds a counting trie, and reports the occurrence count for a
//! fixed set of query words.
//!
//! Run with: cargo run --example wordcount [-- path/to/dictionary.txt]

use std::env;
use std::error::Error;
use std::process;

use libtrie::trie::loader::{build_trie, read_dictionary};

fn main() {
    if let Err(e) = run() {
        eprintln!("wordcount: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/dictionary.txt".to_string());

    let words = read_dictionary(&path)?;
    println!("{}", words.len());
    for word in &words {
        println!("{word}");
    }

    let trie = build_trie(&words)?;
    for query in ["notaword", "ucf", "no", "note", "corg"] {
        println!("\t{query}:{}", trie.lookup(query)?);
    }
    Ok(())
}
