use crate::source::DEFAULT_SOURCE_URL;
use crate::store::DEFAULT_WORD_LENGTH;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Wordle Hinter CLI options
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<String>,

    /// Length of the words to keep; invalid or non-positive values mean 5
    #[arg(short = 'l', long = "length", allow_hyphen_values = true)]
    pub word_length: Option<String>,

    /// Search for this pattern and exit (repeatable)
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Word list downloaded when no usable dictionary is given
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// Give up on the download after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print every loaded word
    #[arg(long)]
    pub list: bool,

    /// Send progress messages to the log instead of stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Nothing about the dictionary was given on the command line, so ask.
    #[must_use]
    pub fn needs_setup_prompts(&self) -> bool {
        self.dictionary_path.is_none() && self.word_length.is_none() && self.patterns.is_empty()
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Where the dictionary comes from and which word length to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub dictionary_path: String,
    pub word_length: usize,
}

/// Parse a user-supplied word length, falling back to 5.
#[must_use]
pub fn parse_word_length(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_WORD_LENGTH),
        _ => DEFAULT_WORD_LENGTH,
    }
}

/// Read one line without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(Some(input))
}

pub fn read_setup<R: BufRead, W: Write>(
    cli: &Cli,
    reader: &mut R,
    out: &mut W,
) -> io::Result<Setup> {
    if !cli.needs_setup_prompts() {
        return Ok(Setup {
            dictionary_path: cli.dictionary_path.clone().unwrap_or_default(),
            word_length: cli
                .word_length
                .as_deref()
                .map_or(DEFAULT_WORD_LENGTH, parse_word_length),
        });
    }

    writeln!(out, "Welcome to Wordle Hinter!")?;
    writeln!(
        out,
        "Input the path to a custom dictionary or do nothing to download the default one"
    )?;
    let dictionary_path = read_line(reader)?.unwrap_or_default();

    writeln!(out, "Input the LENGTH of the words you want in this dictionary")?;
    let word_length = read_line(reader)?
        .as_deref()
        .map_or(DEFAULT_WORD_LENGTH, parse_word_length);

    Ok(Setup {
        dictionary_path,
        word_length,
    })
}
