//! Command lexer - splits an input line into whitespace-separated words

use std::fmt::Display;

/// Reserved command words
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Keyword {
    Insert,
    Select,
    Delete,
    All,
    From,
    Where,
    Help,
    Tables,
}

impl Keyword {
    /// Attempts to parse a word as a keyword (case-insensitive)
    pub fn from_str(ident: &str) -> Option<Keyword> {
        Some(match ident.to_uppercase().as_ref() {
            "INSERT" => Keyword::Insert,
            "SELECT" => Keyword::Select,
            "DELETE" => Keyword::Delete,
            "ALL" => Keyword::All,
            "FROM" => Keyword::From,
            "WHERE" => Keyword::Where,
            "HELP" => Keyword::Help,
            "TABLES" => Keyword::Tables,
            _ => return None,
        })
    }

    /// Returns the uppercase string representation of the keyword
    pub fn to_str(&self) -> &str {
        match self {
            Keyword::Insert => "INSERT",
            Keyword::Select => "SELECT",
            Keyword::Delete => "DELETE",
            Keyword::All => "ALL",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::Help => "HELP",
            Keyword::Tables => "TABLES",
        }
    }

    /// Whether `word` spells this keyword, ignoring case
    pub fn is(&self, word: &str) -> bool {
        word.eq_ignore_ascii_case(self.to_str())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Splits a line into words. Runs of whitespace collapse.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
