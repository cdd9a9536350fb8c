use crate::error::{Error, Result};
use crate::sql::parser::lexer::{Keyword, tokenize};

use ast::{Dialect, Statement};

pub mod ast;
mod lexer;

pub const INSERT_USAGE: &str = "usage: INSERT <table> <value1>, <value2>, ...";
pub const SELECT_USAGE: &str = "usage: SELECT ALL <table> | SELECT <table> WHERE <filter>";
pub const DELETE_USAGE: &str = "usage: DELETE FROM <table> WHERE <filter>";
pub const TABLES_USAGE: &str = "usage: TABLES";

/// Separator between values of an INSERT
const VALUE_SEPARATOR: &str = ", ";

/// Command parser - turns one input line into a `Statement`
pub struct Parser<'a> {
    tokens: Vec<&'a str>,
    dialect: Dialect,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input line
    pub fn new(input: &'a str, dialect: Dialect) -> Self {
        Parser {
            tokens: tokenize(input),
            dialect,
        }
    }

    /// Parses the line, dispatching on the first word
    pub fn parse(&self) -> Result<Statement> {
        let verb = match self.tokens.first() {
            Some(verb) => *verb,
            None => return Err(Error::Parse("please enter a command".to_string())),
        };
        match Keyword::from_str(verb) {
            Some(Keyword::Insert) => self.parse_insert(),
            Some(Keyword::Select) => self.parse_select(),
            Some(Keyword::Delete) => self.parse_delete(),
            Some(Keyword::Tables) if self.tokens.len() == 1 => Ok(Statement::Tables),
            Some(Keyword::Tables) => Err(usage(TABLES_USAGE)),
            Some(Keyword::Help) => Ok(Statement::Help),
            _ => Err(Error::Parse(format!("unknown command: {}", verb))),
        }
    }

    /// INSERT <table> <v1>, <v2>, ...
    ///
    /// Words after the table name are joined back with single spaces and the
    /// result is split on ", ". Values not separated exactly that way stay
    /// glued together.
    fn parse_insert(&self) -> Result<Statement> {
        let min_len = match self.dialect {
            Dialect::Strict => 3,
            Dialect::Legacy => 5,
        };
        if self.tokens.len() < min_len {
            return Err(usage(INSERT_USAGE));
        }
        let values = self
            .rest(2)
            .split(VALUE_SEPARATOR)
            .map(String::from)
            .collect();
        Ok(Statement::Insert {
            table_name: self.tokens[1].to_string(),
            values,
        })
    }

    fn parse_select(&self) -> Result<Statement> {
        let t = &self.tokens;
        if t.len() == 3 && Keyword::All.is(t[1]) {
            return Ok(Statement::Select {
                table_name: t[2].to_string(),
                filter: None,
            });
        }
        // The word at index 2 is only checked in the strict dialect
        let valid = match self.dialect {
            Dialect::Strict => t.len() >= 4 && Keyword::Where.is(t[2]),
            Dialect::Legacy => t.len() >= 4,
        };
        if !valid {
            return Err(usage(SELECT_USAGE));
        }
        Ok(Statement::Select {
            table_name: t[1].to_string(),
            filter: Some(self.rest(3)),
        })
    }

    fn parse_delete(&self) -> Result<Statement> {
        let t = &self.tokens;
        // Legacy accepts an empty filter, which matches every record
        let valid = match self.dialect {
            Dialect::Strict => {
                t.len() >= 5 && Keyword::From.is(t[1]) && Keyword::Where.is(t[3])
            }
            Dialect::Legacy => t.len() >= 4,
        };
        if !valid {
            return Err(usage(DELETE_USAGE));
        }
        Ok(Statement::Delete {
            table_name: t[2].to_string(),
            filter: self.rest(4),
        })
    }

    /// Words from `start` onward, joined with single spaces
    fn rest(&self, start: usize) -> String {
        self.tokens.get(start..).unwrap_or_default().join(" ")
    }
}

fn usage(text: &str) -> Error {
    Error::Parse(text.to_string())
}

/// Command summary printed by HELP
pub fn help_text(dialect: Dialect) -> String {
    let mut lines = vec![
        INSERT_USAGE.trim_start_matches("usage: ").to_string(),
        "SELECT ALL <table>".to_string(),
        "SELECT <table> WHERE <filter>".to_string(),
        "DELETE FROM <table> WHERE <filter>".to_string(),
        "TABLES".to_string(),
        "HELP".to_string(),
        "exit".to_string(),
    ];
    if dialect == Dialect::Legacy {
        lines.push(
            "(legacy syntax: WHERE/FROM are not checked, \
             INSERT takes at least 3 value words)"
                .to_string(),
        );
    }
    lines.join("\n")
}
