/// Parsed form of one command line
#[derive(Debug, PartialEq)]
pub enum Statement {
    /// INSERT <table> <v1>, <v2>, ...
    Insert {
        table_name: String,
        values: Vec<String>,
    },
    /// SELECT ALL <table>, or SELECT <table> WHERE <filter>
    Select {
        table_name: String,
        /// None means every record
        filter: Option<String>,
    },
    /// DELETE FROM <table> WHERE <filter>
    Delete {
        table_name: String,
        filter: String,
    },
    /// TABLES
    Tables,
    /// HELP
    Help,
}

/// Command grammar variant
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Dialect {
    /// Keywords between table name and filter are required and checked
    #[default]
    Strict,
    /// Historical grammar: the word before the filter is skipped unchecked,
    /// and INSERT needs at least four words after the verb
    Legacy,
}
