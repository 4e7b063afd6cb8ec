// Wildcard patterns: `*` is any run of characters, `?` is exactly one.

use crate::error::PatternError;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;

pub const WILDCARD: char = '*';
pub const SINGLE_WILDCARD: char = '?';

#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Validate and compile `pattern`.
    ///
    /// Only `*` counts as a hint here. A pattern made of literals and `?` alone
    /// is rejected even though `?` is honoured during matching.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] for blank input, [`PatternError::MissingWildcard`]
    /// when there is no `*`.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.trim().is_empty() {
            return Err(PatternError::Empty);
        }
        if !pattern.contains(WILDCARD) {
            return Err(PatternError::MissingWildcard);
        }

        let regex = RegexBuilder::new(&to_regex(pattern))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for WildcardPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            WILDCARD => out.push_str(".*"),
            SINGLE_WILDCARD => out.push('.'),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out.push('$');
    out
}
