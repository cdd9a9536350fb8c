use std::fmt::Display;

/// A record is an ordered list of text fields
pub type Record = Vec<String>;

/// Returns true if any field of the record contains the filter substring
///
/// Plain containment: case-sensitive, no anchoring, no patterns. An empty
/// filter matches every record that has at least one field.
pub fn matches(record: &[String], filter: &str) -> bool {
    record.iter().any(|field| field.contains(filter))
}

/// Console rendering of a record, fields separated by spaces inside brackets
pub struct Fields<'a>(pub &'a [String]);

impl<'a> Display for Fields<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}
