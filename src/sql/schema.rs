use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Database schema, loaded once at startup and never mutated
///
/// ```json
/// { "name": "shop", "tuples_limit": 1000, "structure": { "users": ["id", "name"] } }
/// ```
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: String,
    /// Maximum records per table. Parsed, not enforced.
    #[serde(default)]
    pub tuples_limit: i64,
    /// Table name to ordered column names
    #[serde(default)]
    pub structure: BTreeMap<String, Vec<String>>,
}

impl Schema {
    /// Reads and parses the schema document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| Error::Config(format!("cannot open {}: {}", path.display(), err)))?;
        let schema: Schema = serde_json::from_str(&text)
            .map_err(|err| Error::Config(format!("cannot decode {}: {}", path.display(), err)))?;
        info!(
            schema = %schema.name,
            tables = schema.structure.len(),
            "loaded schema from {}",
            path.display()
        );
        Ok(schema)
    }

    /// Parses a schema from a JSON document
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the column list of a table, error if the table doesn't exist
    pub fn must_get_table(&self, table_name: &str) -> Result<&[String]> {
        self.structure
            .get(table_name)
            .map(Vec::as_slice)
            .ok_or(Error::TableNotFound(table_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::error::{Error, Result};

    use super::Schema;

    #[test]
    fn test_from_json() -> Result<()> {
        let schema = Schema::from_json(
            r#"{
                "name": "shop",
                "tuples_limit": 1000,
                "structure": {
                    "users": ["id", "name"],
                    "orders": ["id", "user_id", "total"]
                }
            }"#,
        )?;
        assert_eq!(schema.name, "shop");
        assert_eq!(schema.tuples_limit, 1000);
        assert_eq!(schema.must_get_table("users")?, ["id", "name"]);
        assert_eq!(
            schema.must_get_table("Users"),
            Err(Error::TableNotFound("Users".to_string()))
        );
        assert_eq!(schema.must_get_table("orders")?, ["id", "user_id", "total"]);
        assert_eq!(
            schema.must_get_table("items"),
            Err(Error::TableNotFound("items".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_missing_keys_default() -> Result<()> {
        let schema = Schema::from_json(r#"{"name": "empty", "extra": true}"#)?;
        assert_eq!(schema.tuples_limit, 0);
        assert!(schema.structure.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_errors() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let missing = Schema::load(dir.path().join("scheme.json"));
        assert!(matches!(missing, Err(Error::Config(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"name\": ")?;
        assert!(matches!(Schema::load(&path), Err(Error::Config(_))));

        let path = dir.path().join("wrong.json");
        fs::write(&path, r#"{"structure": ["users"]}"#)?;
        assert!(matches!(Schema::load(&path), Err(Error::Config(_))));

        let path = dir.path().join("scheme.json");
        fs::write(&path, r#"{"name": "db", "tuples_limit": 5, "structure": {"users": ["id"]}}"#)?;
        assert_eq!(Schema::load(&path)?.must_get_table("users")?, ["id"]);
        Ok(())
    }
}
