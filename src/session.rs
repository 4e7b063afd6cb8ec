use crate::cli::read_line;
use crate::diagnostics::Diagnostics;
use crate::store::WordStore;
use std::io::{self, BufRead, Write};

enum PatternInput {
    Search(String),
    Exit,
}

fn read_pattern<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<PatternInput> {
    writeln!(out, "Input the PATTERN of the word you want to search for")?;
    let input = match read_line(reader)? {
        Some(line) => line,
        None => return Ok(PatternInput::Exit),
    };

    if input.trim().is_empty() || input.eq_ignore_ascii_case("exit") {
        Ok(PatternInput::Exit)
    } else {
        Ok(PatternInput::Search(input))
    }
}

/// Run one query and print the matches, one per line.
/// Returns `false` if the pattern was rejected.
pub fn search_and_print<D: Diagnostics, W: Write>(
    store: &WordStore<D>,
    pattern: &str,
    out: &mut W,
) -> io::Result<bool> {
    writeln!(out, "Pattern to search: {pattern}")?;
    match store.find_matches(pattern) {
        Ok(words) => {
            for word in &words {
                writeln!(out, "{word}")?;
            }
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

/// Ask for patterns until end of input, a blank line, or `exit`.
pub fn hint_loop<D: Diagnostics, R: BufRead, W: Write>(
    store: &WordStore<D>,
    mut reader: R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let pattern = match read_pattern(&mut reader, out)? {
            PatternInput::Exit => break,
            PatternInput::Search(p) => p,
        };

        search_and_print(store, &pattern, out)?;
        writeln!(out, "Write a new pattern or type 'Exit' to exit the program")?;
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

/// Report the loaded word count and, with `list`, every word.
/// Written to `out` regardless of where diagnostics go.
pub fn print_loaded<D: Diagnostics, W: Write>(
    store: &WordStore<D>,
    list: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Loaded {} words.", store.word_count())?;
    if list {
        for word in store.words() {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}

/// Run each pattern once. Returns how many were rejected.
pub fn run_patterns<D: Diagnostics, W: Write>(
    store: &WordStore<D>,
    patterns: &[String],
    out: &mut W,
) -> io::Result<usize> {
    let mut rejected = 0;
    for pattern in patterns {
        if !search_and_print(store, pattern, out)? {
            rejected += 1;
        }
    }
    Ok(rejected)
}
